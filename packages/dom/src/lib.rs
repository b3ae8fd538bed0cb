//! An in-memory host document for rendering custom elements without a
//! browser. Nodes are reference counted handles and follow DOM semantics for
//! insertion, fragments and event bubbling.

mod document;
mod event;
mod html;
mod node;
mod selector;

#[doc(inline)]
pub use {
    document::Document,
    event::{dispatch_event, Event},
    node::MemNode,
    selector::Selector,
};
