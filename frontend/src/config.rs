use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const FALLBACK_API_BASE_URL: &str = "http://localhost:3000/api";

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, key: &str, alt_key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &alt_key.into()).ok());
    val.and_then(|v| v.as_string())
}

/// Deployment override: window.__LEAVEDESK_ENV = { API_BASE_URL: "..." }
/// or window.__LEAVEDESK_CONFIG = { api_base_url: "..." } (written back by us
/// after a successful config.json fetch).
fn snapshot_from_globals() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        read_global_key("__LEAVEDESK_ENV", "API_BASE_URL", "api_base_url")
            .or_else(|| read_global_key("__LEAVEDESK_CONFIG", "api_base_url", "API_BASE_URL"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    #[cfg(target_arch = "wasm32")]
    {
        let url = match &cfg.api_base_url {
            Some(url) => url,
            None => return,
        };
        let window = match web_sys::window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__LEAVEDESK_CONFIG".into(), &obj);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = cfg;
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(FALLBACK_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
