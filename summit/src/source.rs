use crate::error::LoadError;
use std::cell::Cell;
use std::rc::Rc;

/// Dataset shipped with the crate, used when no remote source is configured.
pub const BUNDLED_DATASET: &str = include_str!("../data/mountains.json");

/// Where raw dataset text comes from. Implementations report transport
/// failures as `LoadError::Network`; parsing happens in the loader.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human readable origin for logs.
    fn describe(&self) -> String { "dataset".to_string() }
}

impl<S: DatasetSource + ?Sized> DatasetSource for Rc<S> {
    async fn fetch(&self) -> Result<String, LoadError> { (**self).fetch().await }
    fn describe(&self) -> String { (**self).describe() }
}

/// In-memory text; counts fetches so callers can observe cache hits.
#[derive(Debug, Default)]
pub struct StaticSource {
    text: String,
    fetches: Cell<u32>,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self { StaticSource { text: text.into(), fetches: Cell::new(0) } }

    pub fn bundled() -> Self { Self::new(BUNDLED_DATASET) }

    pub fn fetch_count(&self) -> u32 { self.fetches.get() }
}

impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.text.clone())
    }

    fn describe(&self) -> String { format!("static ({} bytes)", self.text.len()) }
}
