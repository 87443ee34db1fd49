//! Browser location and history helpers.
//!
//! Outside the browser these are no-ops and the initial path is `/`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Path (with query) the page was loaded at
pub fn initial_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let path = location.pathname().unwrap_or_else(|_| "/".into());
            let query = location.search().unwrap_or_default();
            return format!("{}{}", path, query);
        }
    }
    "/".to_string()
}

/// Add a history entry for `path`
pub fn push(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                tracing::debug!("pushState failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Replace the current history entry (used for redirects)
pub fn replace(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
                tracing::debug!("replaceState failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// RAII guard detaching the `popstate` handler on drop
#[cfg(target_arch = "wasm32")]
pub struct PopStateGuard {
    _onpopstate: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for PopStateGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.set_onpopstate(None);
        }
    }
}

/// Call `on_change` with the new path whenever the user navigates back/forward
#[cfg(target_arch = "wasm32")]
pub fn listen(mut on_change: impl FnMut(String) + 'static) -> Option<PopStateGuard> {
    let window = web_sys::window()?;
    let onpopstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_change(initial_path());
    }) as Box<dyn FnMut(_)>);
    window.set_onpopstate(Some(onpopstate.as_ref().unchecked_ref()));

    Some(PopStateGuard {
        _onpopstate: onpopstate,
    })
}
