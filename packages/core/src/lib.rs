#![allow(clippy::type_complexity)]

mod event;
mod node;
mod payload;
mod str;

#[doc(inline)]
pub use prelude::*;

pub mod prelude {
    #[doc(inline)]
    pub use crate::{
        event::{EventHandler, EventOptions, IntoEventHandler},
        node::{GenericNode, NodeType},
        payload::Payload,
        str::{RcStr, StringLike},
    };
}

#[cfg(feature = "fxhash")]
pub type RandomState = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;
#[cfg(not(feature = "fxhash"))]
pub type RandomState = std::collections::hash_map::RandomState;
pub type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;
pub type HashSet<T> = std::collections::HashSet<T, RandomState>;
