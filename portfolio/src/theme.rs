use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-dark",
            ThemeMode::Light => "theme-light",
        }
    }
}

// persistence for the theme preference
//
// load() returns Ok(None) when nothing has been stored yet; both an empty store and a
// failing one fall back to dark mode
pub trait ThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>>;

    fn save(&self, mode: ThemeMode) -> Result<()>;
}

// the theme is handed down the tree as context, and the store is passed in explicitly at
// each call rather than captured, which keeps this type Copy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn load(store: &impl ThemeStore) -> Self {
        let mode = match store.load() {
            Ok(Some(mode)) => mode,
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                error!(%err, "failed to read theme preference, using default");
                ThemeMode::default()
            }
        };

        Theme { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self, store: &impl ThemeStore) -> ThemeMode {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "theme toggled");

        // a failed write only costs the preference on the next load
        if let Err(err) = store.save(self.mode) {
            error!(%err, "failed to persist theme preference");
        }

        self.mode
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        fail: Cell<bool>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Result<Option<ThemeMode>> {
            if self.fail.get() {
                return Err(anyhow::Error::msg("storage unavailable"));
            }
            match &*self.value.borrow() {
                Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
                None => Ok(None),
            }
        }

        fn save(&self, mode: ThemeMode) -> Result<()> {
            if self.fail.get() {
                return Err(anyhow::Error::msg("storage unavailable"));
            }
            *self.value.borrow_mut() = Some(serde_json::to_string(&mode)?);
            Ok(())
        }
    }

    #[test]
    fn defaults_to_dark_without_preference() {
        let store = MemoryStore::default();
        assert_eq!(Theme::load(&store).mode(), ThemeMode::Dark);
    }

    #[test]
    fn defaults_to_dark_when_store_fails() {
        let store = MemoryStore::default();
        store.fail.set(true);
        assert_eq!(Theme::load(&store).mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_across_loads() {
        let store = MemoryStore::default();
        let mut theme = Theme::load(&store);

        assert_eq!(theme.toggle(&store), ThemeMode::Light);
        assert_eq!(Theme::load(&store).mode(), ThemeMode::Light);

        theme.toggle(&store);
        assert_eq!(Theme::load(&store).mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_still_flips_when_save_fails() {
        let store = MemoryStore::default();
        let mut theme = Theme::load(&store);
        store.fail.set(true);
        assert_eq!(theme.toggle(&store), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn garbage_preference_falls_back() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some(String::from("\"Sepia\""));
        assert_eq!(Theme::load(&store).mode(), ThemeMode::Dark);
    }
}
