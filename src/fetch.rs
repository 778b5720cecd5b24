//! Browser-side dataset transport.
//!
//! Uses web-sys fetch; every transport or HTTP status failure becomes
//! `LoadError::Network` so the UI can offer a retry.

use summit::cache::Clock;
use summit::source::{DatasetSource, StaticSource};
use summit::LoadError;

pub const DEFAULT_DATASET_URL: &str = "/data/mountains.json";

#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }

    async fn get_text(&self) -> Result<String, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| format!("request error: {:?}", e))?;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch error: {:?}", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| "response is not a Response")?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| format!("text promise error: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("body error: {:?}", e))?;

        text.as_string().ok_or_else(|| "response body is not text".to_string())
    }
}

impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        self.get_text().await.map_err(LoadError::Network)
    }

    fn describe(&self) -> String { format!("GET {}", self.url) }
}

/// Remote URL when configured, the bundled copy otherwise.
pub enum ViewerSource {
    Http(HttpSource),
    Bundled(StaticSource),
}

impl DatasetSource for ViewerSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        match self {
            ViewerSource::Http(s) => s.fetch().await,
            ViewerSource::Bundled(s) => s.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ViewerSource::Http(s) => s.describe(),
            ViewerSource::Bundled(s) => s.describe(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 { js_sys::Date::now() }
}
