pub mod cache;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod loader;
pub mod model;
pub mod scaling;
pub mod selection;
pub mod source;
pub mod geometry {
    pub mod breakpoints;
    pub mod limits;
    pub mod tolerance;
}
pub mod json;
pub mod svg;

pub use dataset::Dataset;
pub use error::{LoadError, ValidationReason};
pub use layout::{compute_layout, Layout, PlacedShape, ScaleOptions};
pub use loader::{Completion, LoadState, Loader, RequestToken};
pub use model::{Mountain, Viewport};
pub use selection::{Selection, ToggleOutcome};

use std::rc::Rc;
use tracing::debug;

/// One user's comparison session: the loaded dataset, the current selection
/// and the layout options applied to it.
#[derive(Clone, Debug, Default)]
pub struct Comparison {
    pub(crate) dataset: Option<Rc<Dataset>>,
    pub(crate) selection: Selection,
    pub(crate) options: ScaleOptions,
}

impl Comparison {
    pub fn new() -> Self { Self::default() }

    pub fn with_dataset(dataset: Rc<Dataset>) -> Self {
        let mut c = Self::new();
        c.set_dataset(dataset);
        c
    }

    /// Swaps in a new dataset. Selected ids that survive are refreshed from
    /// the new records, the rest are dropped.
    pub fn set_dataset(&mut self, dataset: Rc<Dataset>) {
        let kept: Vec<Mountain> = self
            .selection
            .mountains()
            .iter()
            .filter_map(|m| dataset.get(&m.id).cloned())
            .collect();
        let dropped = self.selection.len() - kept.len();
        self.selection.clear();
        for m in &kept {
            self.selection.toggle(m);
        }
        if dropped > 0 {
            debug!(dropped, "selection pruned after dataset change");
        }
        self.dataset = Some(dataset);
    }

    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_deref() }

    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn options(&self) -> ScaleOptions { self.options }

    pub fn set_options(&mut self, options: ScaleOptions) { self.options = options; }

    /// `None` when the id is not in the loaded dataset.
    pub fn toggle(&mut self, id: &str) -> Option<ToggleOutcome> {
        if self.selection.contains(id) {
            self.selection.remove(id);
            return Some(ToggleOutcome::Removed);
        }
        let m = self.dataset.as_ref()?.get(id)?;
        Some(self.selection.toggle(m))
    }

    pub fn clear_selection(&mut self) { self.selection.clear(); }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        compute_layout(self.selection.mountains(), viewport, &self.options)
    }

    pub fn to_svg_paths(&self, viewport: Viewport) -> Vec<String> {
        svg::to_svg_paths(&self.layout(viewport))
    }

    pub fn to_svg_document(&self, viewport: Viewport) -> String {
        svg::to_svg_document(&self.layout(viewport))
    }
}

impl Layout {
    pub fn to_svg_paths(&self) -> Vec<String> { svg::to_svg_paths(self) }
    pub fn to_svg_document(&self) -> String { svg::to_svg_document(self) }
}
