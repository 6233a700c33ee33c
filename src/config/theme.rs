use std::fmt;

use tracing::warn;

use crate::{
    errors::Result,
    storage::{keys, KeyValueStore},
};

/// Dark mode preference persisted under the `darkMode` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkMode {
    Enabled,
    #[default]
    Disabled,
}

impl DarkMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DarkMode::Enabled => "enabled",
            DarkMode::Disabled => "disabled",
        }
    }

    /// Interprets a stored value; anything but `"enabled"` means disabled.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("enabled") => DarkMode::Enabled,
            _ => DarkMode::Disabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == DarkMode::Enabled
    }

    pub fn toggled(self) -> Self {
        match self {
            DarkMode::Enabled => DarkMode::Disabled,
            DarkMode::Disabled => DarkMode::Enabled,
        }
    }

    /// Reads the preference, treating an unreadable store as disabled.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(keys::DARK_MODE) {
            Ok(value) => Self::from_stored(value.as_deref()),
            Err(err) => {
                warn!(error = %err, "dark mode preference unreadable; using disabled");
                DarkMode::Disabled
            }
        }
    }

    pub fn persist(self, store: &dyn KeyValueStore) -> Result<()> {
        store.set(keys::DARK_MODE, self.as_str())
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn absent_or_unknown_value_is_disabled() {
        assert_eq!(DarkMode::from_stored(None), DarkMode::Disabled);
        assert_eq!(DarkMode::from_stored(Some("yes")), DarkMode::Disabled);
        assert_eq!(DarkMode::from_stored(Some("enabled")), DarkMode::Enabled);
    }

    #[test]
    fn toggle_round_trips_through_the_store() {
        let store = MemoryStore::new();
        assert_eq!(DarkMode::load(&store), DarkMode::Disabled);

        DarkMode::load(&store).toggled().persist(&store).unwrap();
        assert_eq!(store.get(keys::DARK_MODE).unwrap().as_deref(), Some("enabled"));
        assert_eq!(DarkMode::load(&store), DarkMode::Enabled);
    }
}
