// src/prefs.rs
//! Local key/value preference storage.
//! The only value kept between sessions is the color theme, stored under the
//! `theme` key as `"dark"` or `"light"`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const THEME_KEY: &str = "theme";

/// A string-to-string map persisted as a JSON object.
/// Every `set` writes the whole map back to disk.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store; nothing is written until the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring unparsable preferences in {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read preferences from {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        PreferenceStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the stored theme, falling back to light.
    pub fn load(store: &PreferenceStore) -> Theme {
        match store.get(THEME_KEY) {
            Some("dark") => Theme::Dark,
            Some("light") | None => Theme::Light,
            Some(other) => {
                log::warn!("Unknown theme {:?} in preferences, using light", other);
                Theme::Light
            }
        }
    }

    pub fn save(self, store: &mut PreferenceStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Flip the stored theme and return the new one.
    pub fn toggle(store: &mut PreferenceStore) -> Result<Theme> {
        let theme = Theme::load(store).toggled();
        theme.save(store)?;
        log::info!("Theme switched to {}", theme);
        Ok(theme)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
