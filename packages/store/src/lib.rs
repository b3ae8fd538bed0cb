//! The application store: a single state value, named events and a render
//! signal. Events are queued by an [`Emitter`] and handled on
//! [`Store::flush`], never re-entrantly.

mod emitter;
mod store;

#[doc(inline)]
pub use {
    emitter::{events, Emitted, Emitter},
    store::{Flush, ListenerId, Store},
};
