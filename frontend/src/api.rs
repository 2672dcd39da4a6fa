use crate::components::utils::js_error_message;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use shared::{ClientConfig, DetectionResponse, HealthStatus, SubmitError};
use web_sys::{AbortController, AbortSignal, FormData};

/// Posts `file` to the detection endpoint and decodes the reply.
///
/// The exchange races the configured deadline. When the deadline wins the
/// request is aborted through `controller`. An abort triggered elsewhere
/// shows up as [`SubmitError::Cancelled`].
pub async fn detect(
    config: &ClientConfig,
    file: &GlooFile,
    controller: Option<&AbortController>,
) -> Result<DetectionResponse, SubmitError> {
    let signal = controller.map(|c| c.signal());

    let exchange = exchange(config, file, signal.as_ref());
    let deadline = TimeoutFuture::new(config.timeout_ms);
    pin_mut!(exchange, deadline);

    match select(exchange, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            log::warn!(
                "Detection request to {} exceeded {} ms, aborting",
                config.detect_endpoint,
                config.timeout_ms
            );
            if let Some(controller) = controller {
                controller.abort();
            }
            Err(SubmitError::TimedOut {
                secs: config.timeout_secs(),
            })
        }
    }
}

async fn exchange(
    config: &ClientConfig,
    file: &GlooFile,
    signal: Option<&AbortSignal>,
) -> Result<DetectionResponse, SubmitError> {
    let form_data = FormData::new().map_err(|e| SubmitError::Transport(js_error_message(&e)))?;
    form_data
        .append_with_blob(&config.file_field, file.as_ref())
        .map_err(|e| SubmitError::Transport(js_error_message(&e)))?;

    let request = Request::post(&config.detect_endpoint)
        .abort_signal(signal)
        .body(form_data)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    log::info!("Uploading {} ({} bytes) to {}", file.name(), file.size(), config.detect_endpoint);

    let response = request.send().await.map_err(|e| {
        if signal.is_some_and(|s| s.aborted()) {
            SubmitError::Cancelled
        } else {
            SubmitError::Transport(e.to_string())
        }
    })?;

    decode_detection(response).await
}

// Any status is decoded: failure replies carry `error` in the body.
async fn decode_detection(response: Response) -> Result<DetectionResponse, SubmitError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    serde_json::from_str::<DetectionResponse>(&body).map_err(|e| {
        log::debug!("Undecodable detection reply (status {}): {}", status, body);
        SubmitError::Parse(e.to_string())
    })
}

pub async fn fetch_health(config: &ClientConfig) -> Result<HealthStatus, gloo_net::Error> {
    Request::get(&config.health_endpoint)
        .send()
        .await?
        .json::<HealthStatus>()
        .await
}
