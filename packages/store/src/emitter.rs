use celem_core::{Payload, RcStr};
use std::{cell::RefCell, collections::VecDeque, fmt, rc::Rc};

/// Names the store gives special meaning to.
pub mod events {
    /// Request a new render cycle once the queue is drained.
    pub const RENDER: &str = "render";
    /// Emitted once after the application is mounted.
    pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
    /// Listeners registered under this name observe every event.
    pub const WILDCARD: &str = "*";
}

/// A queued event.
#[derive(Clone, Debug)]
pub struct Emitted {
    name: RcStr,
    payload: Option<Payload>,
}

impl Emitted {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}

/// A handle for enqueueing named events. Clones share the same queue.
#[derive(Clone, Default)]
pub struct Emitter {
    queue: Rc<RefCell<VecDeque<Emitted>>>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Emitter {
    pub fn emit(&self, name: impl Into<RcStr>) {
        self.push(name.into(), None);
    }

    pub fn emit_with(&self, name: impl Into<RcStr>, payload: Payload) {
        self.push(name.into(), Some(payload));
    }

    fn push(&self, name: RcStr, payload: Option<Payload>) {
        if name == events::WILDCARD {
            panic!("tried to emit the wildcard event");
        }
        tracing::trace!(event = %name, "emit");
        self.queue.borrow_mut().push_back(Emitted { name, payload });
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn pop(&self) -> Option<Emitted> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_queue() {
        let emitter = Emitter::default();
        let cloned = emitter.clone();
        emitter.emit("increment");
        cloned.emit_with("add", Payload::new(2));
        assert_eq!(emitter.pending(), 2);
        assert!(emitter.ptr_eq(&cloned));

        let first = emitter.pop().unwrap();
        assert_eq!(first.name(), "increment");
        assert!(first.payload().is_none());
        let second = cloned.pop().unwrap();
        assert_eq!(second.payload().and_then(|p| p.get::<i32>()), Some(&2));
        assert!(emitter.pop().is_none());
    }

    #[test]
    #[should_panic = "tried to emit the wildcard event"]
    fn emit_wildcard() {
        Emitter::default().emit(events::WILDCARD);
    }
}
