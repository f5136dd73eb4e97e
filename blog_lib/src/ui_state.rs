//! Keyed boolean state shared between views.
//!
//! Every handle obtained for the same key reads and writes the same value,
//! whichever [`UiState`] clone it came from.

use std::sync::Arc;

use dashmap::DashMap;

/// Registry of named flags. Cloning shares the registry.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    flags: Arc<DashMap<String, bool>>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to `key`, storing `init` only if the key is new.
    pub fn flag(&self, key: &str, init: bool) -> UiFlag {
        self.flags.entry(key.to_string()).or_insert(init);
        UiFlag {
            key: key.to_string(),
            flags: Arc::clone(&self.flags),
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Handle to a single keyed flag.
#[derive(Clone, Debug)]
pub struct UiFlag {
    key: String,
    flags: Arc<DashMap<String, bool>>,
}

impl UiFlag {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> bool {
        self.flags.get(&self.key).map(|v| *v).unwrap_or(false)
    }

    pub fn set(&self, value: bool) {
        self.flags.insert(self.key.clone(), value);
    }
}

/// Post-related view state.
#[derive(Clone, Debug)]
pub struct PostUi {
    show_create: UiFlag,
}

impl PostUi {
    /// Key of the "create post" form visibility flag.
    pub const SHOW_CREATE_KEY: &'static str = "post.showCreate";

    pub fn new(state: &UiState) -> Self {
        Self {
            show_create: state.flag(Self::SHOW_CREATE_KEY, false),
        }
    }

    pub fn show_create(&self) -> bool {
        self.show_create.get()
    }

    pub fn open_create(&self) {
        self.show_create.set(true);
    }

    pub fn close_create(&self) {
        self.show_create.set(false);
    }
}
