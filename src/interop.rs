use js_sys::{Array, Float64Array, Object, Reflect};
use serde::Serialize;
use summit::model::TrianglePath;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

/// Plain JS objects (not `Map`) so the UI can read fields directly.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

pub fn arr_f64(data: &[f64]) -> Float64Array { Float64Array::from(data) }

pub fn str_array<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}

/// `[ax, ay, rx, ry, lx, ly]`: apex, base right, base left.
pub fn triangle_points(t: &TrianglePath) -> Float64Array {
    let pts: Vec<f64> = t.points().iter().flat_map(|p| [p.x, p.y]).collect();
    arr_f64(&pts)
}
