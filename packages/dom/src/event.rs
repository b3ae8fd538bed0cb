use crate::MemNode;
use celem_core::{GenericNode, RcStr};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

/// An event travelling from its target up to the document root.
#[derive(Clone)]
pub struct Event {
    inner: Rc<RawEvent>,
}

struct RawEvent {
    name: RcStr,
    target: MemNode,
    current_target: RefCell<Option<MemNode>>,
    stopped: Cell<bool>,
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.inner.name)
            .field("target", &self.inner.target)
            .finish_non_exhaustive()
    }
}

impl Event {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn target(&self) -> &MemNode {
        &self.inner.target
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> Option<MemNode> {
        self.inner.current_target.borrow().clone()
    }

    pub fn stop_propagation(&self) {
        self.inner.stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.inner.stopped.get()
    }
}

/// Dispatch an event on `target`, then bubble it through the ancestors until
/// a listener stops it. Listeners registered with `once` are removed before
/// they run.
pub fn dispatch_event(target: &MemNode, name: impl Into<RcStr>) -> Event {
    let event = Event {
        inner: Rc::new(RawEvent {
            name: name.into(),
            target: target.clone(),
            current_target: RefCell::new(None),
            stopped: Cell::new(false),
        }),
    };
    tracing::trace!(?event, "dispatch");

    let mut path = Vec::new();
    let mut current = Some(target.clone());
    while let Some(node) = current {
        current = node.parent();
        path.push(node);
    }

    for node in path {
        let listeners = node
            .listeners()
            .into_iter()
            .filter(|(name, _)| name.as_str() == event.name())
            .collect::<Vec<_>>();
        if listeners.is_empty() {
            continue;
        }
        event.inner.current_target.replace(Some(node.clone()));
        for (name, handler) in listeners {
            if handler.options.once {
                node.remove_event_listener(&name, &handler);
            }
            handler.call(event.clone());
        }
        if event.is_propagation_stopped() {
            break;
        }
    }
    event.inner.current_target.replace(None);
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use celem_core::{IntoEventHandler, NodeType};

    fn element(tag: &'static str) -> MemNode {
        MemNode::create(NodeType::Tag(tag.into()))
    }

    fn record(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> impl FnMut(Event) {
        let log = log.clone();
        move |_| log.borrow_mut().push(label)
    }

    #[test]
    fn bubbles_to_ancestors() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let body = element("body");
        let button = element("button");
        body.append_child(&button);
        body.listen_event("click".into(), record(&log, "body").into());
        button.listen_event("click".into(), record(&log, "button").into());
        button.listen_event("input".into(), record(&log, "input").into());

        let event = dispatch_event(&button, "click");
        assert_eq!(*log.borrow(), ["button", "body"]);
        assert_eq!(event.target(), &button);
        assert!(event.current_target().is_none());
    }

    #[test]
    fn stop_propagation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let body = element("body");
        let button = element("button");
        body.append_child(&button);
        body.listen_event("click".into(), record(&log, "body").into());
        button.listen_event(
            "click".into(),
            (|ev: Event| ev.stop_propagation()).into(),
        );
        dispatch_event(&button, "click");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn once_listener_runs_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let button = element("button");
        button.listen_event("click".into(), record(&log, "once").once(true));
        dispatch_event(&button, "click");
        dispatch_event(&button, "click");
        assert_eq!(*log.borrow(), ["once"]);
        assert!(button.listeners().is_empty());
    }
}
