use super::super::Model;
use super::super::Msg;
use super::utils::{download_text, first_image_file, js_error_message, upload_candidate};
use crate::api;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use gloo_timers::callback::Timeout;
use shared::{
    Completion, CoordinateExport, DetectionResponse, HealthStatus, NoticeId, NoticeLevel,
    ReadId, RequestId, SubmitError, EXPORT_FILE_NAME,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let read_id = model.preview.begin(file.name());
    log::info!("Selected {} ({} bytes)", file.name(), file.size());

    let link = ctx.link().clone();
    // Replacing the reader drops, and so aborts, any read still running.
    model.reader = Some(read_as_data_url(&file, move |outcome| {
        link.send_message(Msg::PreviewRead(read_id, outcome.map_err(|e| e.to_string())));
    }));
    model.selected = Some(file);
    true
}

pub fn handle_preview_read(
    model: &mut Model,
    read_id: ReadId,
    outcome: Result<String, String>,
) -> bool {
    if let Err(reason) = &outcome {
        log::error!("Could not read file for preview: {}", reason);
    }
    let applied = model.preview.finish(read_id, outcome);
    if applied {
        model.reader = None;
    }
    applied
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let candidate = model.selected.as_ref().map(upload_candidate);
    let request_id = match model.session.begin(candidate.as_ref(), &model.config) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Submission refused: {}", e);
            push_error(model, ctx, &e);
            return true;
        }
    };

    let Some(file) = model.selected.clone() else {
        model.session.cancel();
        return true;
    };

    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::warn!("Request will not be abortable: {}", js_error_message(&e));
            None
        }
    };
    model.abort = controller.clone();

    let config = model.config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::detect(&config, &file, controller.as_ref()).await;
        link.send_message(Msg::DetectionFinished(request_id, outcome));
    });

    true
}

pub fn handle_detection_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    request_id: RequestId,
    outcome: Result<DetectionResponse, SubmitError>,
) -> bool {
    match model.session.complete(request_id, outcome) {
        Completion::Stale => {
            log::debug!("Dropping reply for superseded request {}", request_id);
            false
        }
        Completion::Rendered { mismatch } => {
            model.abort = None;
            if let Some(report) = model.session.visible_report() {
                log::info!(
                    "Request {} returned {} weeds, {} targets",
                    request_id,
                    report.weed_count,
                    report.targets.len()
                );
            }
            if let Some(mismatch) = mismatch {
                log::warn!("{}", mismatch);
                push_notice(model, ctx, NoticeLevel::Warning, mismatch.to_string());
            }
            true
        }
        Completion::Failed(e) => {
            model.abort = None;
            log::error!("Request {} failed ({}): {}", request_id, e.kind(), e);
            push_error(model, ctx, &e);
            true
        }
    }
}

pub fn handle_cancel(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(request_id) = model.session.cancel() else {
        return false;
    };

    if let Some(controller) = model.abort.take() {
        controller.abort();
    }
    log::info!("Request {} cancelled by user", request_id);
    push_error(model, ctx, &SubmitError::Cancelled);
    true
}

pub fn handle_export(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(report) = model.session.visible_report() else {
        return false;
    };

    let export = CoordinateExport::from(report);
    let saved = export
        .to_json()
        .map_err(|e| e.to_string())
        .and_then(|json| {
            download_text(EXPORT_FILE_NAME, &json, "application/json")
                .map_err(|e| js_error_message(&e))
        });

    match saved {
        Ok(()) => {
            log::info!("Exported {} targets", export.total_targets);
            false
        }
        Err(reason) => {
            log::error!("Coordinate export failed: {}", reason);
            push_notice(
                model,
                ctx,
                NoticeLevel::Error,
                format!("Could not export coordinates: {}", reason),
            );
            true
        }
    }
}

pub fn handle_health_checked(model: &mut Model, ctx: &Context<Model>, status: HealthStatus) -> bool {
    log::info!("Backend status: {:?}, model loaded: {:?}", status.status, status.model_loaded);
    if status.model_missing() {
        push_notice(
            model,
            ctx,
            NoticeLevel::Warning,
            "Model not loaded. Please train the model first.",
        );
        return true;
    }
    false
}

pub fn check_health(model: &Model, ctx: &Context<Model>) {
    let config = model.config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_health(&config).await {
            Ok(status) => link.send_message(Msg::HealthChecked(status)),
            Err(e) => log::warn!("Health check against {} failed: {}", config.health_endpoint, e),
        }
    });
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image_file(&file_list));

    match file {
        Some(file) => handle_file_selected(model, ctx, file),
        None => {
            log::warn!("Drop contained no image file");
            push_notice(model, ctx, NoticeLevel::Warning, "No image file in drop.");
            true
        }
    }
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let file = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image_file(&file_list));

    if let Some(file) = file {
        event.prevent_default();
        return handle_file_selected(model, ctx, file);
    }
    false
}

pub fn push_error(model: &mut Model, ctx: &Context<Model>, error: &SubmitError) {
    let id = model.notices.push_error(error);
    schedule_dismiss(model, ctx, id);
}

pub fn push_notice(
    model: &mut Model,
    ctx: &Context<Model>,
    level: NoticeLevel,
    message: impl Into<String>,
) {
    let id = model.notices.push(level, message);
    schedule_dismiss(model, ctx, id);
}

pub fn handle_dismiss_notice(model: &mut Model, id: NoticeId) -> bool {
    model.notice_timers.remove(&id);
    model.notices.dismiss(id)
}

fn schedule_dismiss(model: &mut Model, ctx: &Context<Model>, id: NoticeId) {
    let link = ctx.link().clone();
    let timeout = Timeout::new(model.config.notice_ms, move || {
        link.send_message(Msg::DismissNotice(id));
    });
    model.notice_timers.insert(id, timeout);
}
