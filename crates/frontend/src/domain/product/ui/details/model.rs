use crate::shared::api_utils::{product_url, ApiError};
use contracts::domain::product::ProductUpdate;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub async fn update_product(id: i64, dto: &ProductUpdate) -> Result<(), ApiError> {
    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(dto).map_err(|e| ApiError::Decode(e.to_string()))?;
    let js_body = wasm_bindgen::JsValue::from_str(&body);
    opts.set_body(&js_body);

    let url = product_url(id);
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
        return Err(ApiError::Update(resp.status()));
    }
    Ok(())
}
