//! Fetch-backed HTTP client
//!
//! Calls `window.fetch` through `web_sys` directly instead of `gloo-net`.

use async_trait::async_trait;
use gymdash::{DashError, DashResult, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// HTTP client for the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    pub fn new() -> Self {
        Self
    }

    fn build(req: &HttpRequest) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (key, value) in &req.headers {
            headers.set(key, value)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
    }

    async fn read_text(response: &Response) -> Result<String, JsValue> {
        let text = JsFuture::from(response.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> DashResult<HttpResponse> {
        let request = Self::build(&req)
            .map_err(|e| DashError::Transport(format!("invalid request: {}", js_error(e))))?;

        let window =
            web_sys::window().ok_or_else(|| DashError::Transport("no window".to_string()))?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| DashError::Transport(js_error(e)))?;

        let response: Response = value
            .dyn_into()
            .map_err(|e| DashError::Decode(format!("not a Response: {}", js_error(e))))?;

        let body = Self::read_text(&response)
            .await
            .map_err(|e| DashError::Decode(js_error(e)))?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
