use crate::emitter::{events, Emitted, Emitter};
use celem_core::{RandomState, RcStr};
use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt;

const INITIAL_LISTENER_SLOTS: usize = 2;

new_key_type! {
    pub struct ListenerId;
}

type Handler<S> = Box<dyn FnMut(&mut S, &Emitted, &Emitter)>;

struct Listener<S> {
    name: RcStr,
    once: bool,
    handler: Handler<S>,
}

/// Owns the application state and the listeners mutating it.
pub struct Store<S> {
    state: S,
    emitter: Emitter,
    listeners: SlotMap<ListenerId, Listener<S>>,
    by_name: IndexMap<RcStr, SmallVec<[ListenerId; INITIAL_LISTENER_SLOTS]>, RandomState>,
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("events", &self.by_name.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// What a call to [`Store::flush`] did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flush {
    pub handled: usize,
    /// Whether a render was requested while flushing.
    pub render: bool,
}

impl<S: 'static> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            emitter: Emitter::default(),
            listeners: SlotMap::with_key(),
            by_name: IndexMap::default(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct access for models initializing the state. Everything after
    /// setup should go through events.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn on(
        &mut self,
        name: impl Into<RcStr>,
        f: impl 'static + FnMut(&mut S, &Emitted, &Emitter),
    ) -> ListenerId {
        self.add(name.into(), false, Box::new(f))
    }

    /// Like [`Store::on`], but the listener is removed after its first call.
    pub fn once(
        &mut self,
        name: impl Into<RcStr>,
        f: impl 'static + FnMut(&mut S, &Emitted, &Emitter),
    ) -> ListenerId {
        self.add(name.into(), true, Box::new(f))
    }

    fn add(&mut self, name: RcStr, once: bool, handler: Handler<S>) -> ListenerId {
        let id = self.listeners.insert(Listener {
            name: name.clone(),
            once,
            handler,
        });
        self.by_name.entry(name).or_default().push(id);
        id
    }

    /// Returns `false` if the listener has already been removed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let Some(listener) = self.listeners.remove(id) else {
            return false;
        };
        if let Some(ids) = self.by_name.get_mut(&listener.name) {
            ids.retain(|t| *t != id);
            if ids.is_empty() {
                self.by_name.shift_remove(&listener.name);
            }
        }
        true
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, |ids| ids.len())
    }

    /// Run listeners for every queued event in FIFO order, including events
    /// emitted by the listeners themselves.
    pub fn flush(&mut self) -> Flush {
        let mut flush = Flush::default();
        while let Some(event) = self.emitter.pop() {
            flush.handled += 1;
            if event.name() == events::RENDER {
                flush.render = true;
            }
            tracing::debug!(event = event.name(), "handle");
            self.dispatch(event.name(), &event);
            self.dispatch(events::WILDCARD, &event);
        }
        flush
    }

    fn dispatch(&mut self, key: &str, event: &Emitted) {
        let Some(ids) = self.by_name.get(key).cloned() else {
            return;
        };
        for id in ids {
            let Some(listener) = self.listeners.get_mut(id) else {
                continue;
            };
            let once = listener.once;
            (listener.handler)(&mut self.state, event, &self.emitter);
            if once {
                self.off(id);
            }
        }
    }
}
