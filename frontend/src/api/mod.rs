//! Browser side of the generation client: the `gloo-net` transport and the
//! file-save helper.

use common::api::{ApiClient, ClientConfig, Transport, TransportError};
use common::model::generation::DownloadHandle;
use common::requests::{ApiRequest, Method, RawResponse};
use gloo_net::http::Request;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|err| TransportError::new(err.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|err| TransportError::new(err.to_string()))?;

        let headers = response.headers();
        let status = response.status();
        let content_type = headers.get("content-type");
        let content_disposition = headers.get("content-disposition");
        let body = response
            .binary()
            .await
            .map_err(|err| TransportError::new(err.to_string()))?;

        debug!("{} answered {status} with {} bytes", request.url, body.len());
        Ok(RawResponse {
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}

/// Client against the base URL baked in at build time.
pub fn client() -> common::api::Result<ApiClient<BrowserTransport>> {
    ApiClient::new(ClientConfig::from_build_env(), BrowserTransport)
}

/// Hands the payload to the browser as a download named `filename`.
///
/// The object URL only lives until the click has been dispatched.
pub fn save_file(handle: &DownloadHandle, filename: &str) -> Result<(), JsValue> {
    let bytes = js_sys::Uint8Array::from(handle.bytes());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(handle.content_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        if let Err(err) = Url::revoke_object_url(&url) {
            log::warn!("could not revoke {url}: {err:?}");
        }
    });
    Ok(())
}

/// The server's suggested name, or one stamped with the current time when it
/// sent none or the browser did not expose it.
pub fn download_name(handle: &DownloadHandle, prefix: &str, extension: &str) -> String {
    handle.save_name(prefix, extension, js_sys::Date::now() as u64)
}

/// Absolute URL of the contact endpoint, shown in the request preview.
pub fn contact_url() -> String {
    ClientConfig::from_build_env().endpoint_url(common::api::CONTACT_ENDPOINT)
}
