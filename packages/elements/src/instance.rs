use crate::{behavior::ElementBehavior, hook::Hook};
use celem_core::{GenericNode, HashMap, Payload};
use slotmap::SlotMap;
use std::fmt;

slotmap::new_key_type! {
    pub struct InstanceId;
}

/// Where an instance is in its life. Transitions only go forward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    /// Created but not yet inserted into the live tree.
    Unconnected,
    /// Connected, no hook has been assigned yet.
    ConnectedInitial,
    /// Connected and updated at least once.
    ConnectedSteady,
}

/// One live custom element: its host node and the behavior created for it.
pub struct Instance<N: GenericNode> {
    host: N,
    behavior: Box<dyn ElementBehavior<N>>,
    lifecycle: Lifecycle,
}

impl<N: GenericNode> fmt::Debug for Instance<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("host", &self.host)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl<N: GenericNode> Instance<N> {
    pub(crate) fn new(host: N, behavior: Box<dyn ElementBehavior<N>>) -> Self {
        Self {
            host,
            behavior,
            lifecycle: Lifecycle::Unconnected,
        }
    }

    pub fn host(&self) -> &N {
        &self.host
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn behavior(&self) -> &dyn ElementBehavior<N> {
        &*self.behavior
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut dyn ElementBehavior<N> {
        &mut *self.behavior
    }

    /// # Panics
    ///
    /// Panics if the instance has already been connected.
    pub(crate) fn connect(&mut self) {
        if self.lifecycle != Lifecycle::Unconnected {
            panic!("tried to connect an element twice");
        }
        tracing::trace!(host = ?self.host, "connected");
        self.behavior.connected(&self.host);
        self.lifecycle = Lifecycle::ConnectedInitial;
    }

    /// # Panics
    ///
    /// Panics if the instance is not connected yet.
    pub(crate) fn assign(&mut self, hook: Hook, payload: &Payload) {
        if self.lifecycle == Lifecycle::Unconnected {
            panic!("tried to assign `{hook}` before the element is connected");
        }
        self.behavior.update(&self.host, hook, payload);
        self.lifecycle = Lifecycle::ConnectedSteady;
    }
}

/// All live instances of one mount, addressable by id or by host node.
pub struct Instances<N: GenericNode> {
    slots: SlotMap<InstanceId, Instance<N>>,
    by_host: HashMap<N, InstanceId>,
}

impl<N: GenericNode> Default for Instances<N> {
    fn default() -> Self {
        Self {
            slots: SlotMap::default(),
            by_host: HashMap::default(),
        }
    }
}

impl<N: GenericNode> fmt::Debug for Instances<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.values()).finish()
    }
}

impl<N: GenericNode> Instances<N> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance<N>> {
        self.slots.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance<N>> {
        self.slots.get_mut(id)
    }

    pub fn find(&self, host: &N) -> Option<InstanceId> {
        self.by_host.get(host).copied()
    }

    pub(crate) fn insert(&mut self, instance: Instance<N>) -> InstanceId {
        let host = instance.host.clone();
        let id = self.slots.insert(instance);
        if self.by_host.insert(host, id).is_some() {
            panic!("tried to create two elements on the same host");
        }
        id
    }

    pub(crate) fn remove(&mut self, host: &N) -> Option<Instance<N>> {
        let id = self.by_host.remove(host)?;
        self.slots.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celem_core::NodeType;
    use celem_dom::MemNode;
    use std::{cell::RefCell, rc::Rc};

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ElementBehavior<MemNode> for Recorder {
        fn connected(&mut self, _: &MemNode) {
            self.0.borrow_mut().push("connected".into());
        }

        fn update(&mut self, _: &MemNode, hook: Hook, _: &Payload) {
            self.0.borrow_mut().push(hook.to_string());
        }
    }

    fn recorder() -> (Instance<MemNode>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let host = MemNode::create(NodeType::Tag("my-recorder".into()));
        (Instance::new(host, Box::new(Recorder(log.clone()))), log)
    }

    #[test]
    fn lifecycle() {
        let (mut instance, log) = recorder();
        assert_eq!(instance.lifecycle(), Lifecycle::Unconnected);
        instance.connect();
        assert_eq!(instance.lifecycle(), Lifecycle::ConnectedInitial);
        instance.assign(Hook::Init, &Payload::new(()));
        assert_eq!(instance.lifecycle(), Lifecycle::ConnectedSteady);
        instance.assign(Hook::Render, &Payload::new(()));
        assert_eq!(instance.lifecycle(), Lifecycle::ConnectedSteady);
        assert_eq!(*log.borrow(), ["connected", "oninit", "onrender"]);
    }

    #[test]
    #[should_panic = "tried to connect an element twice"]
    fn connect_twice() {
        let (mut instance, _) = recorder();
        instance.connect();
        instance.connect();
    }

    #[test]
    #[should_panic = "tried to assign `onrender` before the element is connected"]
    fn assign_before_connect() {
        let (mut instance, _) = recorder();
        instance.assign(Hook::Render, &Payload::new(()));
    }

    #[test]
    fn lookup_by_host() {
        let mut instances = Instances::default();
        let (instance, _) = recorder();
        let host = instance.host().clone();
        let id = instances.insert(instance);
        assert_eq!(instances.find(&host), Some(id));
        assert_eq!(instances.len(), 1);
        assert!(instances.remove(&host).is_some());
        assert!(instances.find(&host).is_none());
        assert!(instances.get(id).is_none());
        assert!(instances.is_empty());
    }
}
