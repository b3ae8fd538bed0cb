use crate::{behavior::ElementBehavior, hook::Hook};
use celem_core::{GenericNode, HashMap, RcStr};
use smallvec::SmallVec;
use std::{collections::hash_map::Entry, fmt};

// Names the HTML standard reserves although they contain a hyphen.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// How one custom element tag behaves: which hooks it accepts and how to
/// create the behavior of a new instance.
pub struct Definition<N> {
    tag: RcStr,
    hooks: SmallVec<[Hook; 2]>,
    factory: Box<dyn Fn() -> Box<dyn ElementBehavior<N>>>,
}

impl<N> fmt::Debug for Definition<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("tag", &self.tag)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl<N: GenericNode> Definition<N> {
    /// # Panics
    ///
    /// Panics if `tag` is not a valid custom element name.
    pub fn new<B>(tag: impl Into<RcStr>, factory: impl 'static + Fn() -> B) -> Self
    where
        B: ElementBehavior<N>,
    {
        let tag = tag.into();
        if !is_valid_name(&tag) {
            panic!("tried to define an invalid custom element name `{tag}`");
        }
        Self {
            tag,
            hooks: SmallVec::new(),
            factory: Box::new(move || -> Box<dyn ElementBehavior<N>> { Box::new(factory()) }),
        }
    }

    /// Accept `hook` as a render-cycle payload.
    pub fn hook(mut self, hook: Hook) -> Self {
        if !self.hooks.contains(&hook) {
            self.hooks.push(hook);
        }
        self
    }

    pub fn tag(&self) -> &RcStr {
        &self.tag
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    pub fn binds(&self, property: &str) -> bool {
        self.hooks.iter().any(|hook| hook.name() == property)
    }

    pub(crate) fn create(&self) -> Box<dyn ElementBehavior<N>> {
        (self.factory)()
    }
}

/// Maps tag names to definitions. Built once at startup and passed to every
/// render pass by reference.
pub struct Registry<N> {
    definitions: HashMap<RcStr, Definition<N>>,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self {
            definitions: HashMap::default(),
        }
    }
}

impl<N> fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.definitions.keys()).finish()
    }
}

impl<N: GenericNode> Registry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the tag has already been defined.
    pub fn define(&mut self, definition: Definition<N>) {
        if let Err(definition) = self.try_define(definition) {
            panic!(
                "tried to define a duplicated element `{}`",
                definition.tag()
            );
        }
    }

    /// Define an element, or hand the definition back if its tag is taken.
    pub fn try_define(&mut self, definition: Definition<N>) -> Result<(), Definition<N>> {
        match self.definitions.entry(definition.tag.clone()) {
            Entry::Occupied(_) => Err(definition),
            Entry::Vacant(entry) => {
                tracing::debug!(tag = %definition.tag, hooks = ?definition.hooks, "define");
                entry.insert(definition);
                Ok(())
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Definition<N>> {
        self.definitions.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn is_valid_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && name
            .chars()
            .all(|c| !c.is_ascii() || matches!(c, 'a'..='z' | '0'..='9' | '-' | '.' | '_'))
        && !RESERVED_NAMES.contains(&name)
}
