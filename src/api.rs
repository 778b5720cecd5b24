use crate::fetch::{HttpSource, ViewerSource, DEFAULT_DATASET_URL};
use crate::interop::{arr_f64, new_obj, set_kv, str_array, to_js, triangle_points};
use crate::{error, Viewer, ViewerState};
use js_sys::{Array, Float64Array, Promise};
use std::rc::Rc;
use summit::cache::CachePolicy;
use summit::geometry::limits::{DEFAULT_MARGIN_RATIO, DEFAULT_PADDING, DEFAULT_SPACING};
use summit::json::parse_dataset_str;
use summit::model::{ContainerDimensions, MaxDimensions};
use summit::scaling;
use summit::{Dataset, LoadError, Mountain, ScaleOptions, Viewport};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Panic hook plus `tracing` output to the browser console. Safe to call twice.
#[wasm_bindgen]
pub fn init() {
    set_panic_hook();
    #[cfg(target_arch = "wasm32")]
    let _ = tracing_wasm::try_set_as_global_default();
}

fn apply_load(state: &ViewerState, res: Result<Rc<Dataset>, LoadError>) -> JsValue {
    match res {
        Ok(ds) => {
            debug!(records = ds.len(), "viewer dataset replaced");
            state.comparison.borrow_mut().set_dataset(ds.clone());
            match to_js(ds.mountains()) {
                Ok(v) => error::ok(v),
                Err(e) => error::serialize(e),
            }
        }
        Err(LoadError::Superseded) => {
            debug!("superseded load result dropped");
            error::load_error(&LoadError::Superseded)
        }
        Err(e) => {
            warn!(code = e.code(), error = %e, "viewer load failed");
            error::load_error(&e)
        }
    }
}

fn check_viewport(vw: f64, vh: f64) -> Result<Viewport, JsValue> {
    if !vw.is_finite() {
        return Err(error::non_finite("viewport_width"));
    }
    if !vh.is_finite() {
        return Err(error::non_finite("viewport_height"));
    }
    Ok(Viewport::new(vw, vh))
}

fn mountains_from_js(param: &str, v: JsValue) -> Result<Vec<Mountain>, JsValue> {
    serde_wasm_bindgen::from_value(v).map_err(|e| error::invalid_input(param, e))
}

#[wasm_bindgen]
impl Viewer {
    /// `source_url`: `None` uses the bundled dataset, an empty string the
    /// default URL. `cache_ttl_ms`: `None` keeps the default lifetime.
    #[wasm_bindgen(constructor)]
    pub fn new(source_url: Option<String>, cache_ttl_ms: Option<f64>) -> Viewer {
        let source = match source_url.as_deref() {
            None => return Viewer::rs_new_with_policy_bundled(cache_ttl_ms),
            Some("") => HttpSource::new(DEFAULT_DATASET_URL),
            Some(url) => HttpSource::new(url),
        };
        Viewer::rs_new(ViewerSource::Http(source), policy_from(cache_ttl_ms))
    }

    // Loading
    pub fn load(&self) -> Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let res = inner.loader.load().await;
            Ok(apply_load(&inner, res))
        })
    }
    pub fn reload(&self) -> Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let res = inner.loader.reload().await;
            Ok(apply_load(&inner, res))
        })
    }
    pub fn cancel(&self) {
        self.inner.loader.cancel();
    }
    pub fn is_loading(&self) -> bool {
        self.inner.loader.state().is_loading()
    }
    /// Loads a dataset supplied by the host page. Supersedes pending fetches.
    pub fn load_from_json(&self, text: &str) -> JsValue {
        let token = self.inner.loader.begin();
        let res = self.inner.loader.finish(token, parse_dataset_str(text)).into_result();
        apply_load(&self.inner, res)
    }

    // Dataset
    pub fn mountains(&self) -> JsValue {
        let c = self.inner.comparison.borrow();
        match c.dataset() {
            Some(ds) => to_js(ds.mountains()).unwrap_or(JsValue::NULL),
            None => Array::new().into(),
        }
    }
    pub fn mountain_count(&self) -> u32 {
        self.inner.comparison.borrow().dataset().map_or(0, |d| d.len() as u32)
    }

    // Selection
    pub fn toggle(&self, id: &str) -> JsValue {
        if self.inner.comparison.borrow().dataset().is_none() {
            return error::not_loaded();
        }
        let outcome = self.inner.comparison.borrow_mut().toggle(id);
        match outcome {
            Some(o) => match to_js(&o) {
                Ok(v) => error::ok(v),
                Err(e) => error::serialize(e),
            },
            None => error::unknown_id(id),
        }
    }
    pub fn clear(&self) {
        self.inner.comparison.borrow_mut().clear_selection();
    }
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner.comparison.borrow().selection().contains(id)
    }
    /// True when `id` is unselected and the selection is full.
    pub fn is_blocked(&self, id: &str) -> bool {
        self.inner.comparison.borrow().selection().is_blocked(id)
    }
    pub fn selected_ids(&self) -> Array {
        let c = self.inner.comparison.borrow();
        str_array(c.selection().ids())
    }
    pub fn selection_len(&self) -> u32 {
        self.inner.comparison.borrow().selection().len() as u32
    }
    pub fn max_selection(&self) -> u32 {
        self.inner.comparison.borrow().selection().capacity() as u32
    }

    // Options
    pub fn set_options(&self, opts: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<ScaleOptions>(opts) {
            Ok(o) => self.apply_options(o),
            Err(e) => error::invalid_input("options", e),
        }
    }
    pub fn set_options_json(&self, text: &str) -> JsValue {
        match serde_json::from_str::<ScaleOptions>(text) {
            Ok(o) => self.apply_options(o),
            Err(e) => error::invalid_input("options", e),
        }
    }
    pub fn options(&self) -> JsValue {
        to_js(&self.inner.comparison.borrow().options()).unwrap_or(JsValue::NULL)
    }

    // Layout + SVG
    pub fn layout(&self, viewport_width: f64, viewport_height: f64) -> JsValue {
        let vp = match check_viewport(viewport_width, viewport_height) {
            Ok(vp) => vp,
            Err(e) => return e,
        };
        let layout = self.inner.comparison.borrow().layout(vp);
        match to_js(&layout) {
            Ok(v) => {
                let o = new_obj();
                set_kv(&o, "layout", &v);
                set_kv(&o, "viewBox", &JsValue::from_str(&layout.view_box.to_string()));
                error::ok(o.into())
            }
            Err(e) => error::serialize(e),
        }
    }
    pub fn svg_paths(&self, viewport_width: f64, viewport_height: f64) -> Array {
        let Ok(vp) = check_viewport(viewport_width, viewport_height) else { return Array::new() };
        let paths = self.inner.comparison.borrow().to_svg_paths(vp);
        str_array(paths.iter().map(String::as_str))
    }
    pub fn svg_document(&self, viewport_width: f64, viewport_height: f64) -> Option<String> {
        let vp = check_viewport(viewport_width, viewport_height).ok()?;
        Some(self.inner.comparison.borrow().to_svg_document(vp))
    }
    /// Six numbers per shape (apex, base right, base left) in view box space.
    pub fn shape_points(&self, viewport_width: f64, viewport_height: f64) -> Float64Array {
        let Ok(vp) = check_viewport(viewport_width, viewport_height) else { return arr_f64(&[]) };
        let layout = self.inner.comparison.borrow().layout(vp);
        let mut out = Vec::with_capacity(layout.shapes.len() * 6);
        for s in &layout.shapes {
            let t = s.geometry.triangle_path.translated(s.offset_x, s.offset_y);
            out.extend(t.points().iter().flat_map(|p| [p.x, p.y]));
        }
        arr_f64(&out)
    }
}

impl Viewer {
    fn rs_new_with_policy_bundled(cache_ttl_ms: Option<f64>) -> Viewer {
        let v = Viewer::rs_bundled();
        v.inner.loader.set_cache_policy(policy_from(cache_ttl_ms));
        v
    }

    fn apply_options(&self, o: ScaleOptions) -> JsValue {
        if !(o.padding.is_finite() && o.margin_ratio.is_finite() && o.spacing.is_finite()) {
            return error::non_finite("options");
        }
        self.inner.comparison.borrow_mut().set_options(o);
        error::ok(JsValue::TRUE)
    }
}

fn policy_from(cache_ttl_ms: Option<f64>) -> CachePolicy {
    match cache_ttl_ms {
        Some(ms) if ms.is_nan() => CachePolicy::default(),
        Some(ms) => CachePolicy::ttl(ms),
        None => CachePolicy::default(),
    }
}

// Stateless engine entry points

#[wasm_bindgen]
pub fn max_dimensions(mountains: JsValue) -> JsValue {
    match mountains_from_js("mountains", mountains) {
        Ok(ms) => to_js(&scaling::max_dimensions(&ms)).map_or_else(error::serialize, error::ok),
        Err(e) => e,
    }
}

#[wasm_bindgen]
pub fn container_dimensions(viewport_width: f64, viewport_height: f64, padding: Option<f64>) -> JsValue {
    let c = scaling::container_dimensions(viewport_width, viewport_height, padding.unwrap_or(DEFAULT_PADDING));
    to_js(&c).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn scale_factor(
    max_height: f64,
    max_width: f64,
    container_width: f64,
    container_height: f64,
    margin_ratio: Option<f64>,
) -> f64 {
    scaling::scale_factor(
        MaxDimensions { max_height, max_width },
        ContainerDimensions { width: container_width, height: container_height },
        margin_ratio.unwrap_or(DEFAULT_MARGIN_RATIO),
    )
}

#[wasm_bindgen]
pub fn triangle_path(mountain: JsValue, scale_factor: f64) -> JsValue {
    let m: Mountain = match serde_wasm_bindgen::from_value(mountain) {
        Ok(m) => m,
        Err(e) => return error::invalid_input("mountain", e),
    };
    let t = scaling::triangle_path(&m, scale_factor);
    let o = new_obj();
    set_kv(&o, "points", &triangle_points(&t).into());
    set_kv(&o, "d", &JsValue::from_str(&t.to_svg_d()));
    error::ok(o.into())
}

#[wasm_bindgen]
pub fn svg_view_box(mountains: JsValue, scale_factor: f64, spacing: Option<f64>) -> JsValue {
    let ms = match mountains_from_js("mountains", mountains) {
        Ok(ms) => ms,
        Err(e) => return e,
    };
    let vb = scaling::svg_view_box(&ms, scale_factor, spacing.unwrap_or(DEFAULT_SPACING));
    match to_js(&vb) {
        Ok(v) => {
            set_kv(v.unchecked_ref(), "text", &JsValue::from_str(&vb.to_string()));
            error::ok(v)
        }
        Err(e) => error::serialize(e),
    }
}
