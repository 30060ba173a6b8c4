use crate::shared::api_utils::{products_url, ApiError};
use contracts::domain::product::{Product, ProductCreate};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub async fn create_product(dto: &ProductCreate) -> Result<Product, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(dto).map_err(|e| ApiError::Decode(e.to_string()))?;
    let js_body = wasm_bindgen::JsValue::from_str(&body);
    opts.set_body(&js_body);

    let url = products_url();
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    if !resp.ok() {
        return Err(ApiError::Create(resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| ApiError::Transport(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
    let created: Product = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(created)
}
