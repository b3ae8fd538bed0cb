//! Custom elements reconciled by a render cycle, on top of an in-memory
//! document.
//!
//! ```
//! use celem::{counter::counter_app, prelude::*};
//!
//! let mut app = counter_app("Counter");
//! app.mount("body");
//! app.emit("increment");
//! app.flush();
//! let section = app.document().query_selector("my-section").unwrap();
//! assert_eq!(section.text_content(), "Clicks: 1");
//! ```

pub mod app;
pub mod counter;
pub mod template;

#[doc(inline)]
pub use {celem_dom as dom, celem_elements as elements, celem_store as store};

pub mod prelude {
    #[doc(inline)]
    pub use crate::{
        app::{App, RenderArgs},
        template::{fragment, h, text},
    };
    #[doc(inline)]
    pub use celem_core::prelude::*;
    #[doc(inline)]
    pub use celem_dom::{dispatch_event, Document, Event, MemNode};
    #[doc(inline)]
    pub use celem_elements::prelude::*;
    #[doc(inline)]
    pub use celem_store::{events, Emitted, Emitter, Flush, ListenerId, Store};
}
