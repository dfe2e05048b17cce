//! # sudsy-core
//!
//! Core library for sudsy - a shower thought generator.
//!
//! This library provides:
//! - Domain types for thoughts, filters, and themes
//! - The category/vibe/spice catalog
//! - Content loading with an embedded fallback list
//! - A non-repeating picker
//! - Persisted preferences and favorites
//! - Configuration management and logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use sudsy_core::{load_state, load_thoughts, Config, FileStore, Picker};
//!
//! let config = Config::load().expect("failed to load config");
//! let content = load_thoughts(&config.content);
//! let mut picker = Picker::new(content.thoughts).expect("content is never empty");
//!
//! let state = load_state(&FileStore::default_location());
//! let thought = picker.pick(&state.filter());
//! println!("{}", thought.text);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use content::{load_thoughts, ContentOrigin, LoadedContent};
pub use error::{Error, Result};
pub use picker::Picker;
pub use state::{add_saved, clear_saved, load_state, save_state, AppState, SavedThought};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::*;

// Public modules
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod logging;
pub mod picker;
pub mod state;
pub mod store;
pub mod types;
