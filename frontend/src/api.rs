use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shared::{ApiClient, ApiConfig, RawResponse, Transport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::FormData;

use crate::leaf_image::LeafImage;

pub type PredictionClient = ApiClient<FetchTransport>;

/// Builds the client against `TAMATAR_API_URL` as set at build time.
pub fn prediction_client() -> PredictionClient {
    let config = ApiConfig::resolve(option_env!("TAMATAR_API_URL"));
    log::info!("Prediction service: {}", config.base_url());
    ApiClient::new(FetchTransport, config)
}

/// `fetch`-backed transport.
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type Upload = LeafImage;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        upload: &LeafImage,
    ) -> Result<RawResponse, TransportError> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob(field, upload.file().as_ref())
            .map_err(js_error)?;

        let response = Request::post(url)
            .body(form_data)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;

        into_raw(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = Request::get(url).send().await.map_err(net_error)?;
        into_raw(response).await
    }
}

async fn into_raw(response: Response) -> Result<RawResponse, TransportError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.map_err(net_error)?;
    Ok(RawResponse {
        status,
        status_text,
        body,
    })
}

fn net_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) => TransportError::new(js.message),
        other => TransportError::new(other.to_string()),
    }
}

fn js_error(value: JsValue) -> TransportError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", value));
    TransportError::new(message)
}
