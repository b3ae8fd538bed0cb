use std::{cell::RefCell, fmt, rc::Rc};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventOptions {
    /// Remove the listener after its first call.
    pub once: bool,
}

/// A listener attached to a node. Cloning shares the same closure, which is
/// how a listener moves from a template node onto a live node.
pub struct EventHandler<T> {
    handler: Rc<RefCell<dyn FnMut(T)>>,
    pub options: EventOptions,
}

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T> EventHandler<T> {
    pub fn call(&self, event: T) {
        let mut handler = self
            .handler
            .try_borrow_mut()
            .unwrap_or_else(|_| panic!("tried to re-enter a running event handler"));
        (&mut *handler)(event);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }
}

pub trait IntoEventHandler<T>: Into<EventHandler<T>> {
    fn into_event_handler(self) -> EventHandler<T> {
        self.into()
    }

    fn once(self, val: bool) -> EventHandler<T> {
        let mut t = self.into_event_handler();
        t.options.once = val;
        t
    }
}

impl<T, U: Into<EventHandler<T>>> IntoEventHandler<T> for U {}

impl<T, F> From<F> for EventHandler<T>
where
    F: 'static + FnMut(T),
{
    fn from(t: F) -> Self {
        EventHandler {
            handler: Rc::new(RefCell::new(t)),
            options: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_the_closure() {
        let counter = Rc::new(Cell::new(0));
        let handler: EventHandler<i32> = {
            let counter = counter.clone();
            (move |x: i32| counter.set(counter.get() + x)).into()
        };
        let cloned = handler.clone();
        handler.call(1);
        cloned.call(2);
        assert_eq!(counter.get(), 3);
        assert!(handler.ptr_eq(&cloned));
    }

    #[test]
    fn once_option() {
        let handler: EventHandler<()> = (|_: ()| {}).once(true);
        assert!(handler.options.once);
    }
}
