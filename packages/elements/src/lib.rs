//! Custom elements driven by a render cycle.
//!
//! A [`Registry`] maps tag names to [`Definition`]s. A [`Mount`] owns a live
//! tree and morphs it into every freshly rendered template, creating one
//! instance per custom element it meets and reusing it for as long as the
//! element's identity check accepts the new template node.

mod behavior;
mod hook;
mod instance;
mod mount;
mod reconcile;
mod registry;

pub mod kinds {
    //! The element kinds used by applications.

    mod conditional;
    mod refresh;
    #[path = "static.rs"]
    mod static_;
    mod wrapper;

    #[doc(inline)]
    pub use self::{
        conditional::{Conditional, Handle},
        refresh::Refresh,
        static_::Static,
        wrapper::{Wrapper, WrapperRemoval},
    };
}

#[doc(inline)]
pub use prelude::*;

pub mod prelude {
    #[doc(inline)]
    pub use crate::{
        behavior::{Content, ElementBehavior, Identity, Removal},
        hook::Hook,
        instance::{Instance, InstanceId, Instances, Lifecycle},
        kinds::{Conditional, Handle, Refresh, Static, Wrapper, WrapperRemoval},
        mount::Mount,
        registry::{Definition, Registry},
    };
}
