use crate::{
    instance::{Instances, Lifecycle},
    reconcile::Reconciler,
    registry::Registry,
};
use celem_core::{GenericNode, NodeType};

/// A live tree owned by the render cycle. Every [`Mount::render`] morphs it
/// into the shape of a new template.
#[derive(Debug)]
pub struct Mount<N: GenericNode> {
    root: N,
    instances: Instances<N>,
    renders: usize,
}

impl<N: GenericNode> Mount<N> {
    pub fn new(root: N) -> Self {
        Self {
            root,
            instances: Instances::default(),
            renders: 0,
        }
    }

    /// The current root. It differs from the initial one once a template
    /// with another root tag has been rendered. A fragment template never
    /// replaces it.
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Number of completed render passes.
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &Instances<N> {
        &self.instances
    }

    /// Lifecycle of the element living on `host`, if any.
    pub fn lifecycle(&self, host: &N) -> Option<Lifecycle> {
        self.instances
            .find(host)
            .and_then(|id| self.instances.get(id))
            .map(|instance| instance.lifecycle())
    }

    pub fn render(&mut self, registry: &Registry<N>, template: &N) {
        let span = tracing::debug_span!("render", cycle = self.renders);
        let _enter = span.enter();

        let mut reconciler = Reconciler::new(registry, &mut self.instances);
        if let NodeType::Fragment = template.node_type() {
            // The children are rendered into the mount point.
            reconciler.morph_children(&self.root, template);
            reconciler.connect_pending();
            self.renders += 1;
            return;
        }
        let next = reconciler.morph(&self.root, template);
        if next != self.root {
            tracing::debug!(root = ?next, "replace root");
            if let Some(parent) = self.root.parent() {
                parent.replace_child(&next, &self.root);
            }
            self.root = next;
        }
        reconciler.connect_pending();
        self.renders += 1;
    }
}
