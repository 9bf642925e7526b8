//! Concurrent text fetching via the browser `fetch` API.
//!
//! Both map inputs (the CSV dataset and the boundary GeoJSON) are
//! requested up front and joined with `Promise.all`; if either request
//! rejects or comes back non-2xx, the whole pipeline fails and nothing is
//! rendered.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch a URL and resolve to its body as text.
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "GET {} failed with status {}",
            url,
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}

fn text_promise(url: &str) -> js_sys::Promise {
    let url = url.to_string();
    future_to_promise(async move {
        let text = fetch_text(&url).await?;
        Ok(JsValue::from_str(&text))
    })
}

/// Fetch both sources concurrently. Either failure rejects the join.
pub async fn fetch_both(csv_url: &str, geojson_url: &str) -> Result<(String, String), JsValue> {
    let promises = js_sys::Array::of2(&text_promise(csv_url), &text_promise(geojson_url));
    let joined = JsFuture::from(js_sys::Promise::all(&promises)).await?;
    let results: js_sys::Array = joined.dyn_into()?;

    let csv_text = results
        .get(0)
        .as_string()
        .ok_or_else(|| JsValue::from_str("CSV fetch returned no text"))?;
    let geojson_text = results
        .get(1)
        .as_string()
        .ok_or_else(|| JsValue::from_str("GeoJSON fetch returned no text"))?;
    Ok((csv_text, geojson_text))
}
