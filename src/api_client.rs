pub mod report;

use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler. One shot: no retry, no polling. The request is
/// raced against the configured timeout so a hung backend still surfaces as an
/// error instead of leaving the caller waiting forever.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    let timeout_ms = settings::get_settings().request_timeout_ms;
    log::debug!("GET request to: {} (timeout {}ms)", url, timeout_ms);

    let request = Request::get(&url).send();
    let timeout = TimeoutFuture::new(timeout_ms);
    pin_mut!(request);
    pin_mut!(timeout);

    let response = match future::select(request, timeout).await {
        Either::Left((response, _)) => response.map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?,
        Either::Right(_) => {
            let error_msg = format!("Request timed out after {}ms", timeout_ms);
            log::error!("GET {} - {}", endpoint, error_msg);
            return Err(error_msg);
        }
    };

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(payload)
}
