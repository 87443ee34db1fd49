//! JSON-over-HTTP transport for the data source.
//!
//! The browser build uses `fetch`; the server build uses `reqwest`. Builds
//! with neither report [`DataError::Unavailable`].

use serde::Deserialize;
use url::Url;

use super::DataError;

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `url` and decode the JSON body
    #[cfg(target_arch = "wasm32")]
    pub async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &Url) -> Result<T, DataError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, Response};

        let transport = |reason: String| DataError::Transport {
            url: url.to_string(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| transport("No window".into()))?;
        let opts = RequestInit::new();
        opts.set_method("GET");

        let request = Request::new_with_str_and_init(url.as_str(), &opts)
            .map_err(|e| transport(format!("{:?}", e)))?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(|e| transport(format!("{:?}", e)))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| transport("Not a Response".into()))?;

        if !resp.ok() {
            return Err(DataError::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        let decode = |reason: String| DataError::Decode {
            url: url.to_string(),
            reason,
        };
        let json = JsFuture::from(resp.json().map_err(|e| decode(format!("{:?}", e)))?)
            .await
            .map_err(|e| decode(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| decode(e.to_string()))
    }

    /// GET `url` and decode the JSON body
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    pub async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &Url) -> Result<T, DataError> {
        let resp = self
            .inner
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DataError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| DataError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Native build without the server feature has no HTTP stack
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    pub async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &Url) -> Result<T, DataError> {
        tracing::debug!("No HTTP client in this build, cannot fetch {}", url);
        Err(DataError::Unavailable)
    }
}
