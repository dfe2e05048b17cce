//! Persisted user preferences and saved favorites.
//!
//! State is a plain value. Every transition consumes the old state and returns
//! a new one; callers persist the result with [`save_state`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::is_valid_spice;
use crate::store::KeyValueStore;
use crate::types::{Filter, Theme, Thought, ANY_KEY, MAX_SPICE, MIN_SPICE};

/// Key holding the serialized [`AppState`].
pub const STORAGE_KEY: &str = "sudsy_shower_thoughts_v1";

/// Maximum number of saved thoughts.
pub const MAX_SAVED: usize = 30;

/// Spice level for a fresh install.
pub const DEFAULT_SPICE: u8 = 3;

/// A favorite thought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedThought {
    pub id: String,
    pub text: String,
    /// When it was saved (Unix milliseconds on disk)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
}

/// Everything that survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub theme: Theme,
    pub category_key: String,
    pub vibe_key: String,
    pub spice_level: u8,
    /// Most recent first, unique by id, at most [`MAX_SAVED`]
    pub saved: Vec<SavedThought>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            category_key: ANY_KEY.to_string(),
            vibe_key: ANY_KEY.to_string(),
            spice_level: DEFAULT_SPICE,
            saved: Vec::new(),
        }
    }
}

impl AppState {
    /// Filter derived from the current selections.
    pub fn filter(&self) -> Filter {
        Filter::new(&self.category_key, &self.vibe_key, self.spice_level)
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn toggle_theme(self) -> Self {
        let theme = self.theme.toggled();
        self.with_theme(theme)
    }

    pub fn with_category(self, key: impl Into<String>) -> Self {
        Self {
            category_key: key.into(),
            ..self
        }
    }

    pub fn with_vibe(self, key: impl Into<String>) -> Self {
        Self {
            vibe_key: key.into(),
            ..self
        }
    }

    /// Set the spice level, clamped to 1-5.
    pub fn with_spice_level(self, level: u8) -> Self {
        Self {
            spice_level: level.clamp(MIN_SPICE, MAX_SPICE),
            ..self
        }
    }

    /// Whether a thought with this id is already saved.
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|s| s.id == id)
    }

    /// Overlay the fields of a stored JSON object onto the defaults.
    ///
    /// Missing fields, fields with the wrong type, and out-of-range values
    /// keep their defaults. Anything other than an object yields the defaults.
    pub fn merged_over_defaults(value: Value) -> Self {
        let mut state = Self::default();
        let Value::Object(map) = value else {
            return state;
        };

        if let Some(theme) = field::<Theme>(&map, "theme") {
            state.theme = theme;
        }
        if let Some(key) = field::<String>(&map, "categoryKey") {
            state.category_key = key;
        }
        if let Some(key) = field::<String>(&map, "vibeKey") {
            state.vibe_key = key;
        }
        if let Some(level) = field::<u8>(&map, "spiceLevel").filter(|l| is_valid_spice(*l)) {
            state.spice_level = level;
        }
        if let Some(saved) = field::<Vec<SavedThought>>(&map, "saved") {
            state.saved = normalize_saved(saved);
        }
        state
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    let value = map.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(field = key, error = %e, "Ignoring malformed stored field");
            None
        }
    }
}

/// Drop duplicate ids (keeping the first) and cap the list length.
fn normalize_saved(saved: Vec<SavedThought>) -> Vec<SavedThought> {
    let mut out: Vec<SavedThought> = Vec::with_capacity(saved.len().min(MAX_SAVED));
    for item in saved {
        if out.len() == MAX_SAVED {
            break;
        }
        if !out.iter().any(|s| s.id == item.id) {
            out.push(item);
        }
    }
    out
}

/// Load state from `store`, falling back to defaults on absence or corruption.
pub fn load_state(store: &dyn KeyValueStore) -> AppState {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppState::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored state, using defaults");
            return AppState::default();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => AppState::merged_over_defaults(value),
        Err(e) => {
            tracing::warn!(error = %e, "Stored state is not valid JSON, using defaults");
            AppState::default()
        }
    }
}

/// Persist `state`. Failures are logged and otherwise ignored.
pub fn save_state(store: &dyn KeyValueStore, state: &AppState) {
    let raw = match serde_json::to_string(state) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize state");
            return;
        }
    };

    if let Err(e) = store.set(STORAGE_KEY, &raw) {
        tracing::warn!(error = %e, "Failed to persist state");
    }
}

/// Save `item` as a favorite, timestamped now.
pub fn add_saved(state: AppState, item: &Thought) -> AppState {
    add_saved_at(state, item, Utc::now())
}

/// Save `item` as a favorite with an explicit timestamp.
///
/// No-op if the id is already saved. Otherwise the entry is prepended and the
/// list is truncated to [`MAX_SAVED`].
pub fn add_saved_at(state: AppState, item: &Thought, ts: DateTime<Utc>) -> AppState {
    if state.is_saved(&item.id) {
        return state;
    }

    let mut saved = Vec::with_capacity(MAX_SAVED);
    saved.push(SavedThought {
        id: item.id.clone(),
        text: item.text.clone(),
        ts,
    });
    saved.extend(state.saved.iter().take(MAX_SAVED - 1).cloned());

    AppState { saved, ..state }
}

/// Forget every saved thought.
pub fn clear_saved(state: AppState) -> AppState {
    AppState {
        saved: Vec::new(),
        ..state
    }
}
