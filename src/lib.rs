use std::cell::RefCell;
use std::rc::Rc;
use summit::cache::{CachePolicy, DatasetCache};
use summit::source::StaticSource;
use summit::{Comparison, Loader};
use wasm_bindgen::prelude::*;

mod api;
mod error;
mod fetch;
mod interop;

pub use api::{container_dimensions, init, max_dimensions, scale_factor, set_panic_hook, svg_view_box, triangle_path};
pub use fetch::{HttpSource, JsClock, ViewerSource, DEFAULT_DATASET_URL};

pub(crate) struct ViewerState {
    pub(crate) loader: Loader<ViewerSource, JsClock>,
    pub(crate) comparison: RefCell<Comparison>,
}

/// Browser handle on one comparison session. State sits behind an `Rc` so
/// pending load promises can commit into it.
#[wasm_bindgen]
pub struct Viewer {
    pub(crate) inner: Rc<ViewerState>,
}

impl Viewer {
    pub fn rs_new(source: ViewerSource, policy: CachePolicy) -> Viewer {
        let loader = Loader::with_parts(source, JsClock, DatasetCache::new(policy));
        Viewer { inner: Rc::new(ViewerState { loader, comparison: RefCell::new(Comparison::new()) }) }
    }

    pub fn rs_bundled() -> Viewer {
        Self::rs_new(ViewerSource::Bundled(StaticSource::bundled()), CachePolicy::default())
    }
}
