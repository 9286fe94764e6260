use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use portfolio::theme::{ThemeMode, ThemeStore};

pub const THEME_KEY: &str = "theme";

fn storage_key(prefix: &str, key: &str) -> String {
    format!("{prefix}_{key}")
}

pub fn set_local_storage<T>(prefix: &str, key: &str, value: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let key = storage_key(prefix, key);

    LocalStorage::set(key.clone(), value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a key that was never written is not an error
pub fn get_local_storage<T>(prefix: &str, key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(prefix, key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// theme preference, backed by the browser's local storage
#[derive(Clone, Debug, PartialEq)]
pub struct LocalThemeStore {
    prefix: String,
}

impl LocalThemeStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        LocalThemeStore {
            prefix: prefix.into(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> anyhow::Result<Option<ThemeMode>> {
        get_local_storage(&self.prefix, THEME_KEY)
    }

    fn save(&self, mode: ThemeMode) -> anyhow::Result<()> {
        set_local_storage(&self.prefix, THEME_KEY, mode)
    }
}
