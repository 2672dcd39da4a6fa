mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::notifications::render_notifications;
use components::results::render_results;
use components::upload_form::render_upload_form;
use components::utils::scroll_into_view_smooth;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use gloo_timers::callback::Timeout;
use shared::{
    ClientConfig, ConfigOverrides, DetectionResponse, HealthStatus, NoticeBoard, NoticeId,
    Preview, ReadId, RequestId, SubmitError, UploadSession,
};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, ClipboardEvent, DragEvent, KeyboardEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File selection
    FileSelected(GlooFile),
    PreviewRead(ReadId, Result<String, String>),

    // Detection
    Submit,
    DetectionFinished(RequestId, Result<DetectionResponse, SubmitError>),
    CancelSubmission,
    ExportCoordinates,
    HealthChecked(HealthStatus),

    // UI states
    DismissNotice(NoticeId),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

#[derive(Properties, PartialEq)]
struct ModelProps {
    config: ClientConfig,
}

// Main component
struct Model {
    config: ClientConfig,
    session: UploadSession,
    preview: Preview,
    selected: Option<GlooFile>,
    reader: Option<FileReader>,
    abort: Option<AbortController>,
    notices: NoticeBoard,
    notice_timers: HashMap<NoticeId, Timeout>,
    is_dragging: bool,
    results_ref: NodeRef,
    listeners: Vec<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ModelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            config: ctx.props().config.clone(),
            session: UploadSession::new(),
            preview: Preview::new(),
            selected: None,
            reader: None,
            abort: None,
            notices: NoticeBoard::new(),
            notice_timers: HashMap::new(),
            is_dragging: false,
            results_ref: NodeRef::default(),
            listeners: Vec::new(),
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            model.listeners.push(EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            }));

            let link = ctx.link().clone();
            model.listeners.push(EventListener::new(&window, "keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if escape {
                    link.send_message(Msg::CancelSubmission);
                }
            }));
        } else {
            log::error!("No global `window`; paste and Escape shortcuts are disabled");
        }

        handlers::check_health(&model, ctx);
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File selection
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::PreviewRead(read_id, outcome) => {
                handlers::handle_preview_read(self, read_id, outcome)
            }

            // Detection
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::DetectionFinished(request_id, outcome) => {
                handlers::handle_detection_finished(self, ctx, request_id, outcome)
            }
            Msg::CancelSubmission => handlers::handle_cancel(self, ctx),
            Msg::ExportCoordinates => handlers::handle_export(self, ctx),
            Msg::HealthChecked(status) => handlers::handle_health_checked(self, ctx, status),

            // UI states
            Msg::DismissNotice(id) => handlers::handle_dismiss_notice(self, id),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                { render_upload_form(self, ctx) }
                { render_results(self, ctx) }
                </main>

                { render_notifications(self, ctx) }

                <footer class="app-footer">
                    <p>{"Weed Detection & Laser Targeting | Rust WASM client"}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.session.take_scroll_request() {
            if let Some(results) = self.results_ref.cast::<web_sys::Element>() {
                scroll_into_view_smooth(&results);
            }
        }
    }
}

fn build_overrides() -> ConfigOverrides<'static> {
    ConfigOverrides {
        detect_endpoint: option_env!("WEEDSCAN_DETECT_URL"),
        health_endpoint: option_env!("WEEDSCAN_HEALTH_URL"),
        timeout_ms: option_env!("WEEDSCAN_TIMEOUT_MS"),
        notice_ms: option_env!("WEEDSCAN_NOTICE_MS"),
        log_level: option_env!("WEEDSCAN_LOG_LEVEL"),
    }
}

fn main() {
    let (config, rejected) = ClientConfig::default().with_overrides(build_overrides());
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    for e in rejected {
        log::warn!("Ignoring build setting: {}", e);
    }

    log::info!(
        "App starting, detection endpoint {} (timeout {} ms)",
        config.detect_endpoint,
        config.timeout_ms
    );
    yew::Renderer::<Model>::with_props(ModelProps { config }).render();
}
