//! Runtime environment detection for the overlay.
//!
//! In game the page is hosted by the client's embedded browser, which injects
//! `GetParentResourceName()`; callbacks go to `https://{resource}/{name}`.
//! In a plain browser there is no such function, so callbacks go to the
//! `devhost` under `{origin}/nui` and failures fall back to mock data.
//!
//! TRADE-OFFS
//! ==========
//! The fallback override lives in `localStorage` so it can be flipped from
//! devtools without rebuilding; it is best-effort and ignored when storage
//! is unavailable.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use station::FallbackPolicy;

/// Resource name assumed when the host does not provide one.
pub const BROWSER_RESOURCE_NAME: &str = "nui-frame-app";

#[cfg(feature = "csr")]
const FALLBACK_STORAGE_KEY: &str = "recycler_nui_fallback";

/// Where the overlay is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEnv {
    /// Inside the game client.
    Game,
    /// A regular browser tab during development.
    Browser,
}

/// Bridge configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NuiConfig {
    pub env: HostEnv,
    pub resource_name: String,
    /// Prefix every callback name is appended to.
    pub base_url: String,
    pub fallback: FallbackPolicy,
}

impl NuiConfig {
    #[must_use]
    pub fn new(env: HostEnv, resource_name: &str, origin: &str, fallback: FallbackPolicy) -> Self {
        Self {
            env,
            resource_name: resource_name.to_owned(),
            base_url: base_url(env, resource_name, origin),
            fallback,
        }
    }

    /// Full URL for a host callback.
    #[must_use]
    pub fn endpoint(&self, callback: &str) -> String {
        format!("{}/{callback}", self.base_url)
    }

    #[must_use]
    pub fn is_browser(&self) -> bool {
        self.env == HostEnv::Browser
    }

    /// Inspect the page to build the configuration.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window();
            let resource = window.as_ref().and_then(parent_resource_name);
            let origin = window
                .as_ref()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            let stored = window
                .as_ref()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(FALLBACK_STORAGE_KEY).ok().flatten());
            let fallback = parse_fallback(stored.as_deref());
            match resource {
                Some(name) => Self::new(HostEnv::Game, &name, &origin, fallback),
                None => Self::new(HostEnv::Browser, BROWSER_RESOURCE_NAME, &origin, fallback),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::new(HostEnv::Browser, BROWSER_RESOURCE_NAME, "", FallbackPolicy::default())
        }
    }
}

/// Callback prefix for the environment.
#[must_use]
pub fn base_url(env: HostEnv, resource_name: &str, origin: &str) -> String {
    match env {
        HostEnv::Game => format!("https://{resource_name}"),
        HostEnv::Browser => format!("{}/nui", origin.trim_end_matches('/')),
    }
}

/// `mock` (default) or `stale`; anything else keeps the default.
#[must_use]
pub fn parse_fallback(raw: Option<&str>) -> FallbackPolicy {
    match raw.map(str::trim) {
        Some("stale") => FallbackPolicy::KeepStale,
        _ => FallbackPolicy::MockData,
    }
}

/// Call the host-injected `GetParentResourceName()`, if present.
#[cfg(feature = "csr")]
fn parent_resource_name(window: &web_sys::Window) -> Option<String> {
    use wasm_bindgen::JsCast as _;

    let value = js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str("GetParentResourceName")).ok()?;
    let function = value.dyn_into::<js_sys::Function>().ok()?;
    function.call0(window).ok()?.as_string().filter(|name| !name.is_empty())
}
