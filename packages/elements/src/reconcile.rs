use crate::{
    behavior::{Content, ElementBehavior, Removal},
    hook::Hook,
    instance::{Instance, InstanceId, Instances},
    registry::{Definition, Registry},
};
use celem_core::{GenericNode, NodeType, Payload};
use smallvec::SmallVec;

type Hooks = SmallVec<[(Hook, Payload); 2]>;

/// An instance created during this pass, waiting for its host to be
/// inserted into the live tree.
struct Pending {
    id: InstanceId,
    hooks: Hooks,
}

/// One render pass: morphs a live tree into the shape of a freshly rendered
/// template, reusing nodes and element instances wherever it can.
pub(crate) struct Reconciler<'a, N: GenericNode> {
    registry: &'a Registry<N>,
    instances: &'a mut Instances<N>,
    pending: Vec<Pending>,
}

impl<'a, N: GenericNode> Reconciler<'a, N> {
    pub fn new(registry: &'a Registry<N>, instances: &'a mut Instances<N>) -> Self {
        Self {
            registry,
            instances,
            pending: Vec::new(),
        }
    }

    /// Make `live` look like `template` and return the node standing for
    /// `template` afterwards. When this is not `live`, the caller must put it
    /// in place of `live` and then call [`Reconciler::connect_pending`].
    pub fn morph(&mut self, live: &N, template: &N) -> N {
        match (live.node_type(), template.node_type()) {
            (NodeType::Text(old), NodeType::Text(new)) => {
                if old != new {
                    live.set_text(new.into());
                }
                live.clone()
            }
            (NodeType::Tag(old), NodeType::Tag(new)) if old == new => {
                if !self.registry.contains(&new) {
                    update_node(live, template, None);
                    self.diff_children(live, template);
                    live.clone()
                } else if self.update_element(live, template) {
                    live.clone()
                } else {
                    self.replace(live, template)
                }
            }
            (NodeType::Fragment, NodeType::Fragment) => {
                self.diff_children(live, template);
                live.clone()
            }
            _ => self.replace(live, template),
        }
    }

    /// Make the children of `parent` look like those of `template`, leaving
    /// `parent` itself untouched.
    pub fn morph_children(&mut self, parent: &N, template: &N) {
        self.diff_children(parent, template);
    }

    /// Connect every instance created since the last call, in tree order, and
    /// hand each its initial hook payloads.
    pub fn connect_pending(&mut self) {
        for Pending { id, hooks } in std::mem::take(&mut self.pending) {
            // Discarded before it ever reached the live tree.
            let Some(instance) = self.instances.get_mut(id) else {
                continue;
            };
            instance.connect();
            for (hook, payload) in &hooks {
                instance.assign(*hook, payload);
            }
        }
    }

    fn replace(&mut self, live: &N, template: &N) -> N {
        tracing::trace!(?live, "replace");
        self.discard(live);
        self.create(template)
    }

    fn update_element(&mut self, live: &N, template: &N) -> bool {
        let registry = self.registry;
        let Some(definition) = live.tag().and_then(|tag| registry.get(&tag)) else {
            return false;
        };
        let Some(id) = self.instances.find(live) else {
            return false;
        };
        let policy = {
            let behavior = self.behavior(id);
            if !behavior.is_same_node(live, template) {
                tracing::trace!(?live, "not the same element");
                return false;
            }
            behavior.content_policy()
        };
        update_node(live, template, Some(definition));
        if policy == Content::Slotted && !self.diff_content(id, live, template) {
            return false;
        }
        let hooks = hooks_of(definition, template);
        if let Some(instance) = self.instances.get_mut(id) {
            for (hook, payload) in &hooks {
                instance.assign(*hook, payload);
            }
        }
        true
    }

    /// Diff template children against the content an element exposes,
    /// going through its append/remove overrides. Returns `false` if the
    /// element cannot be updated in place.
    fn diff_content(&mut self, id: InstanceId, host: &N, template: &N) -> bool {
        let current = self.behavior(id).content_children(host);
        let wanted = template.children();

        let mut kept = 0;
        let mut replacement = None;
        for (live, tmpl) in current.iter().zip(&wanted) {
            let next = self.morph(live, tmpl);
            if &next != live {
                replacement = Some(next);
                break;
            }
            kept += 1;
        }

        for stale in &current[kept..] {
            self.discard(stale);
            if self.behavior(id).remove_content(host, stale) == Removal::Unsupported {
                tracing::trace!(?host, "content removal is unsupported");
                if let Some(node) = &replacement {
                    self.discard(node);
                }
                return false;
            }
        }

        let start = kept + usize::from(replacement.is_some());
        let mut fresh = Vec::with_capacity(wanted.len() - kept);
        fresh.extend(replacement);
        for tmpl in &wanted[start..] {
            fresh.push(self.create(tmpl));
        }
        for node in &fresh {
            self.behavior(id).append_content(host, node);
        }
        self.connect_pending();
        true
    }

    fn diff_children(&mut self, parent: &N, template: &N) {
        let current = parent.children();
        let wanted = template.children();
        for (live, tmpl) in current.iter().zip(&wanted) {
            let next = self.morph(live, tmpl);
            if &next != live {
                parent.replace_child(&next, live);
                self.connect_pending();
            }
        }
        for tmpl in wanted.iter().skip(current.len()) {
            let node = self.create(tmpl);
            parent.append_child(&node);
            self.connect_pending();
        }
        for stale in current.iter().skip(wanted.len()) {
            self.discard(stale);
            parent.remove_child(stale);
        }
    }

    /// Build a live copy of `template`. Custom elements get a new instance
    /// which stays unconnected until [`Reconciler::connect_pending`].
    fn create(&mut self, template: &N) -> N {
        let ty = template.node_type();
        let node = N::create(ty.clone());
        let registry = self.registry;
        match ty {
            NodeType::Text(_) => {}
            NodeType::Fragment => {
                for child in template.children() {
                    let child = self.create(&child);
                    node.append_child(&child);
                }
            }
            NodeType::Tag(tag) => match registry.get(&tag) {
                Some(definition) => {
                    update_node(&node, template, Some(definition));
                    let id = self
                        .instances
                        .insert(Instance::new(node.clone(), definition.create()));
                    tracing::trace!(%tag, "create element");
                    // Pushed before the children so connection runs in tree order.
                    self.pending.push(Pending {
                        id,
                        hooks: hooks_of(definition, template),
                    });
                    for child in template.children() {
                        let child = self.create(&child);
                        self.behavior(id).append_content(&node, &child);
                    }
                }
                None => {
                    update_node(&node, template, None);
                    for child in template.children() {
                        let child = self.create(&child);
                        node.append_child(&child);
                    }
                }
            },
        }
        node
    }

    /// Forget every instance living in the subtree of `node`.
    fn discard(&mut self, node: &N) {
        if self.instances.remove(node).is_some() {
            tracing::trace!(?node, "discard element");
        }
        for child in node.children() {
            self.discard(&child);
        }
    }

    fn behavior(&mut self, id: InstanceId) -> &mut dyn ElementBehavior<N> {
        match self.instances.get_mut(id) {
            Some(instance) => instance.behavior_mut(),
            None => panic!("tried to use an element that was already discarded"),
        }
    }
}

fn hooks_of<N: GenericNode>(definition: &Definition<N>, template: &N) -> Hooks {
    definition
        .hooks()
        .iter()
        .filter_map(|&hook| template.property(hook.name()).map(|payload| (hook, payload)))
        .collect()
}

/// Copy attributes, properties and listeners of `template` onto `live`.
/// Properties bound as hooks are delivered through the instance instead.
fn update_node<N: GenericNode>(live: &N, template: &N, definition: Option<&Definition<N>>) {
    for (name, _) in live.attributes() {
        if template.attribute(&name).is_none() {
            live.remove_attribute(&name);
        }
    }
    for (name, val) in template.attributes() {
        if live.attribute(&name).as_ref() != Some(&val) {
            live.set_attribute(name, val.into());
        }
    }
    for (name, val) in template.properties() {
        if definition.map_or(false, |definition| definition.binds(&name)) {
            continue;
        }
        live.set_property(name, val);
    }
    live.clear_listeners();
    for (event, handler) in template.listeners() {
        live.listen_event(event, handler);
    }
}
