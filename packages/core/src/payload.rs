use std::{any::Any, fmt, rc::Rc};

/// A type-erased value handed to element hooks and event listeners.
#[derive(Clone)]
pub struct Payload {
    inner: Rc<dyn Any>,
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload").finish_non_exhaustive()
    }
}

impl Payload {
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Get the value if it has the specified type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast() {
        let payload = Payload::new(7u32);
        assert_eq!(payload.get::<u32>(), Some(&7));
        assert!(payload.get::<i32>().is_none());
        assert!(payload.is::<u32>());
        assert!(payload.ptr_eq(&payload.clone()));
        assert!(!payload.ptr_eq(&Payload::new(7u32)));
    }
}
