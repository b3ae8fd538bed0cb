use celem_core::RcStr;
use celem_dom::{dispatch_event, Document, Event, MemNode};
use celem_elements::{Definition, Mount, Registry};
use celem_store::{events, Emitter, Store};

/// The conventional payload handed to elements through a hook: a snapshot
/// of the state and a handle to emit events with.
///
/// The snapshot is only current for the cycle that delivered it. Elements
/// that keep their first payload, such as [`Conditional`], should be given
/// the [`Emitter`] alone.
///
/// [`Conditional`]: celem_elements::Conditional
#[derive(Clone, Debug)]
pub struct RenderArgs<S> {
    pub state: S,
    pub emit: Emitter,
}

type View<S> = Box<dyn Fn(&S, &Emitter) -> MemNode>;

/// Ties a store, a view and a registry of custom elements to a document.
pub struct App<S: 'static> {
    document: Document,
    registry: Registry<MemNode>,
    store: Store<S>,
    view: Option<View<S>>,
    mount: Option<Mount<MemNode>>,
}

impl<S: 'static> App<S> {
    pub fn new(state: S) -> Self {
        Self::with_document(Document::new(), state)
    }

    pub fn with_document(document: Document, state: S) -> Self {
        Self {
            document,
            registry: Registry::new(),
            store: Store::new(state),
            view: None,
            mount: None,
        }
    }

    /// # Panics
    ///
    /// Panics if the tag has already been defined.
    pub fn define(&mut self, definition: Definition<MemNode>) -> &mut Self {
        self.registry.define(definition);
        self
    }

    pub fn registry(&self) -> &Registry<MemNode> {
        &self.registry
    }

    /// Run a model, which initializes the state and registers listeners.
    pub fn model(&mut self, f: impl FnOnce(&mut Store<S>)) -> &mut Self {
        f(&mut self.store);
        self
    }

    pub fn view(&mut self, f: impl 'static + Fn(&S, &Emitter) -> MemNode) -> &mut Self {
        self.view = Some(Box::new(f));
        self
    }

    /// Render into the first node matching `selector`, then announce
    /// [`events::DOM_CONTENT_LOADED`].
    ///
    /// # Panics
    ///
    /// Panics if the application is already mounted, if no view has been
    /// set or if nothing matches `selector`.
    pub fn mount(&mut self, selector: &str) {
        if self.mount.is_some() {
            panic!("tried to mount the application twice");
        }
        let root = self
            .document
            .query_selector(selector)
            .unwrap_or_else(|| panic!("tried to mount on `{selector}` which matches nothing"));
        tracing::debug!(selector, "mount");
        self.mount = Some(Mount::new(root));
        self.render();
        self.emit(events::DOM_CONTENT_LOADED);
        self.flush();
    }

    fn render(&mut self) {
        let Self {
            registry,
            store,
            view,
            mount,
            ..
        } = self;
        let Some(mount) = mount else {
            return;
        };
        let view = view
            .as_ref()
            .unwrap_or_else(|| panic!("tried to render without a view"));
        let template = view(store.state(), store.emitter());
        mount.render(registry, &template);
    }

    pub fn emit(&self, name: impl Into<RcStr>) {
        self.store.emitter().emit(name);
    }

    pub fn emitter(&self) -> Emitter {
        self.store.emitter().clone()
    }

    /// Handle every queued event and re-render whenever a render was
    /// requested, until the queue is empty. Returns the number of renders.
    pub fn flush(&mut self) -> usize {
        let mut renders = 0;
        loop {
            let flush = self.store.flush();
            if !flush.render || self.mount.is_none() {
                break;
            }
            self.render();
            renders += 1;
        }
        renders
    }

    /// Dispatch a DOM event on `target` and flush what its listeners emitted.
    pub fn dispatch(&mut self, target: &MemNode, name: impl Into<RcStr>) -> Event {
        let event = dispatch_event(target, name);
        self.flush();
        event
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mounted(&self) -> Option<&Mount<MemNode>> {
        self.mount.as_ref()
    }
}
