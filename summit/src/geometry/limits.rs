// Centralized caps and defaults for ingestion, selection and layout

// Selection
pub const MAX_SELECTION: usize = 10;

// Dataset ingestion caps
pub const MAX_DATASET_RECORDS: usize = 10_000;
pub const MAX_DATASET_BYTES: usize = 4 * 1024 * 1024;
pub const DATASET_KEY: &str = "mountains";

// Layout defaults
pub const DEFAULT_PADDING: f64 = 40.0;
pub const DEFAULT_MARGIN_RATIO: f64 = 0.1;
pub const DEFAULT_SPACING: f64 = 20.0;
pub const MAX_MARGIN_RATIO: f64 = 0.49;

// Fallback viewBox when nothing is selected
pub const DEFAULT_VIEW_BOX_SIZE: f64 = 100.0;

// Dataset cache lifetime
pub const DEFAULT_CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

#[inline]
pub fn is_positive_dimension(v: f64) -> bool { v.is_finite() && v > 0.0 }

#[inline]
pub fn sanitize_extent(v: f64) -> f64 { if v.is_finite() && v > 0.0 { v } else { 0.0 } }
