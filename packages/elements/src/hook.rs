use std::fmt;

/// A property through which the render cycle hands data to an element.
/// A definition binds the hooks it accepts up front.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Hook {
    /// `oninit`: typically the state and an emitter, used to wire up events.
    Init,
    /// `onrender`: a marker asking the element to refresh itself.
    Render,
}

impl Hook {
    pub const ALL: [Hook; 2] = [Hook::Init, Hook::Render];

    /// The property name carrying this hook's payload.
    pub const fn name(self) -> &'static str {
        match self {
            Hook::Init => "oninit",
            Hook::Render => "onrender",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hook| hook.name() == name)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for hook in Hook::ALL {
            assert_eq!(Hook::from_name(hook.name()), Some(hook));
        }
        assert_eq!(Hook::from_name("onclick"), None);
        assert_eq!(Hook::Render.to_string(), "onrender");
    }
}
