use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::GalleryError;
    use crate::model::{ImageKind, ImageRecord};
    use chrono::{Duration, Utc};

    /// A store whose every operation fails, for exercising the
    /// degraded-read and surfaced-write paths.
    #[derive(Default)]
    pub struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(GalleryError::Store("storage unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(GalleryError::Store("storage unavailable".to_string()))
        }
    }

    /// A store that reads fine but refuses writes (quota exhausted).
    #[derive(Default)]
    pub struct ReadOnlyStore {
        inner: InMemoryStore,
    }

    impl ReadOnlyStore {
        pub fn seeded(key: &str, value: &str) -> Self {
            let mut inner = InMemoryStore::new();
            inner.set(key, value).unwrap();
            Self { inner }
        }
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(GalleryError::Store("storage quota exceeded".to_string()))
        }
    }

    /// Builds a record with a timestamp offset so ordering tests get
    /// distinct, deterministic `created_at` values.
    pub fn record(id: &str, prompt: &str, kind: ImageKind, minutes_ago: i64) -> ImageRecord {
        let mut r = ImageRecord::new(
            id.to_string(),
            format!("https://cdn.example/{}.png", id),
            prompt.to_string(),
            kind,
        );
        r.created_at = Utc::now() - Duration::minutes(minutes_ago);
        r
    }
}
