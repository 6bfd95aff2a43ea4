//! Model asset fetch: progress reporting, a hard timeout and user-visible
//! failure messages. There is no retry and no cancel path; a failed load
//! leaves the viewer in its "not loaded" state for good.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use city_core::MODEL_LOAD_TIMEOUT_MS;

use crate::dom;

fn report(loading: &Option<web::HtmlElement>, text: &str, failed: bool) {
    if let Some(el) = loading {
        el.set_text_content(Some(text));
        if failed {
            let _ = el.style().set_property("color", "red");
            let _ = el.style().set_property("white-space", "pre-line");
        }
    }
}

/// Fetch `url` as raw bytes. `on_loaded` fires at most once, on success.
pub fn load_model(
    url: &str,
    loading: Option<web::HtmlElement>,
    on_loaded: impl FnOnce(Vec<u8>) + 'static,
) {
    let xhr = match web::XmlHttpRequest::new() {
        Ok(x) => x,
        Err(e) => {
            log::error!("XMLHttpRequest creation failed: {:?}", e);
            report(&loading, "Model load failed: no XHR support", true);
            return;
        }
    };
    if xhr.open("GET", url).is_err() {
        report(&loading, "Model load failed: bad asset URL", true);
        return;
    }
    xhr.set_response_type(web::XmlHttpRequestResponseType::Arraybuffer);
    log::info!("loading model: {url}");

    let settled = Rc::new(Cell::new(false));

    // A load that never settles surfaces a timeout message; a late success
    // clears the timer first, so there is no duplicate error afterwards.
    let settled_timeout = settled.clone();
    let loading_timeout = loading.clone();
    let timeout_handle = dom::set_timeout(MODEL_LOAD_TIMEOUT_MS, move || {
        if !settled_timeout.get() {
            log::error!("model load timed out");
            report(
                &loading_timeout,
                "Model load timed out, check your network connection or the asset path",
                true,
            );
        }
    });

    {
        let loading_progress = loading.clone();
        let on_progress = Closure::wrap(Box::new(move |ev: web::ProgressEvent| {
            if ev.length_computable() && ev.total() > 0.0 {
                let percent = ev.loaded() / ev.total() * 100.0;
                report(
                    &loading_progress,
                    &format!("Loading model... {percent:.2}%"),
                    false,
                );
            } else {
                let mb = ev.loaded() / 1024.0 / 1024.0;
                report(&loading_progress, &format!("Loading model... {mb:.2} MB"), false);
            }
        }) as Box<dyn FnMut(_)>);
        xhr.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
        on_progress.forget();
    }

    {
        let xhr_load = xhr.clone();
        let settled_load = settled.clone();
        let loading_load = loading.clone();
        let mut on_loaded = Some(on_loaded);
        let on_load = Closure::wrap(Box::new(move |_ev: web::ProgressEvent| {
            settled_load.set(true);
            if let Some(h) = timeout_handle {
                dom::clear_timeout(h);
            }
            let status = xhr_load.status().unwrap_or(0);
            // Status 0 covers file:// responses, which have no HTTP status.
            if status == 200 || status == 0 {
                let bytes = xhr_load
                    .response()
                    .ok()
                    .and_then(|r| r.dyn_into::<js_sys::ArrayBuffer>().ok())
                    .map(|buf| js_sys::Uint8Array::new(&buf).to_vec());
                match bytes {
                    Some(bytes) if !bytes.is_empty() => {
                        log::info!("model fetched: {} bytes", bytes.len());
                        if let Some(f) = on_loaded.take() {
                            f(bytes);
                        }
                    }
                    _ => report(&loading_load, "Model load failed: empty response", true),
                }
            } else if status == 404 {
                report(
                    &loading_load,
                    "Model load failed: asset not found (404)\n\
                     Hint: serve the assets over a local web server (e.g. python3 -m http.server)",
                    true,
                );
            } else {
                report(
                    &loading_load,
                    &format!("Model load failed: HTTP {status}"),
                    true,
                );
            }
        }) as Box<dyn FnMut(_)>);
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();
    }

    {
        let settled_err = settled.clone();
        let loading_err = loading.clone();
        let on_error = Closure::wrap(Box::new(move |_ev: web::ProgressEvent| {
            settled_err.set(true);
            if let Some(h) = timeout_handle {
                dom::clear_timeout(h);
            }
            log::error!("model load failed");
            report(
                &loading_err,
                "Model load failed: check the asset path and network connection",
                true,
            );
        }) as Box<dyn FnMut(_)>);
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    if xhr.send().is_err() {
        settled.set(true);
        report(&loading, "Model load failed: request could not be sent", true);
    }
}
