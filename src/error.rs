use crate::interop::{new_obj, set_kv};
use summit::LoadError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, retryable: bool, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    set_kv(&e, "retryable", &JsValue::from_bool(retryable));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Maps loader failures, keeping the retryable distinction for the UI.
pub fn load_error(e: &LoadError) -> JsValue {
    let data = match e {
        LoadError::Validation { index, field, reason } => {
            let d = new_obj();
            set_kv(&d, "field", &JsValue::from_str(field));
            if let Some(i) = index { set_kv(&d, "index", &JsValue::from_f64(*i as f64)); }
            set_kv(&d, "reason", &JsValue::from_str(&reason.to_string()));
            Some(d.into())
        }
        _ => None,
    };
    err(e.code(), e.to_string(), e.is_retryable(), data)
}

#[inline]
pub fn invalid_input(param: &str, detail: impl std::fmt::Display) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("invalid_input", format!("parameter '{}' is invalid: {}", param, detail), false, Some(d.into()))
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), false, Some(d.into()))
}

#[inline]
pub fn unknown_id(id: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_str(id));
    err("unknown_id", format!("no mountain with id '{}'", id), false, Some(d.into()))
}

#[inline]
pub fn not_loaded() -> JsValue {
    err("not_loaded", "dataset has not been loaded yet", true, None)
}

#[inline]
pub fn serialize(e: impl std::fmt::Display) -> JsValue {
    err("serialize", format!("failed to convert result: {}", e), false, None)
}
