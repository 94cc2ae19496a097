//! Application state for the salary engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReferenceData};

/// State shared by every handler: the reference tables loaded at startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loader for sharing across handlers.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The underlying loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the reference tables.
    pub fn reference(&self) -> &ReferenceData {
        self.config.reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_shareable() {
        fn assert_shareable<T: Clone + Send + Sync + 'static>() {}
        assert_shareable::<AppState>();
    }

    #[test]
    fn test_clones_share_reference_data() {
        let reference = ReferenceData::new(vec![], vec![], vec![], vec![]).unwrap();
        let state = AppState::new(ConfigLoader::from_reference(reference));
        let clone = state.clone();
        assert!(std::ptr::eq(state.reference(), clone.reference()));
    }
}
