//! Key bindings listed in the footer help panel.

/// A single key binding: the key label and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// The key or key combination (e.g., "r", "ctrl+c").
    pub key: String,
    /// The help description (e.g., "red", "quit").
    pub description: String,
    /// Disabled bindings are left out of the help panel.
    pub enabled: bool,
}

impl KeyBinding {
    /// Create a new, enabled key binding.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Mark the binding as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl<K: Into<String>, D: Into<String>> From<(K, D)> for KeyBinding {
    fn from((key, description): (K, D)) -> Self {
        Self::new(key, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_binding_creation() {
        let binding = KeyBinding::new("r", "red");
        assert_eq!(binding.key, "r");
        assert_eq!(binding.description, "red");
        assert!(binding.enabled);
    }

    #[test]
    fn test_disabled_binding() {
        let binding = KeyBinding::new("ctrl+c", "quit").disabled();
        assert!(!binding.enabled);
    }

    #[test]
    fn test_from_tuple() {
        let binding: KeyBinding = ("g", "green").into();
        assert_eq!(binding, KeyBinding::new("g", "green"));
    }
}
