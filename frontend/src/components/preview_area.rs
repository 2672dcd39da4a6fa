use super::super::Model;
use shared::PreviewState;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    html! {
        <div id="preview" class="preview">
            { render_preview_state(model.preview.state()) }
        </div>
    }
}

fn render_preview_state(state: &PreviewState) -> Html {
    match state {
        PreviewState::Empty => html! {},
        PreviewState::Loading { file_name } => html! {
            <div class="loading-preview">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{ format!("Loading preview of {}...", file_name) }</p>
            </div>
        },
        PreviewState::Loaded { file_name, data_url } => html! {
            <img src={data_url.clone()} alt="Preview" title={file_name.clone()} />
        },
        PreviewState::Failed { file_name, reason } => html! {
            <div class="unavailable-preview" title={reason.clone()}>
                <i class="fa-solid fa-image"></i>
                <p>{ format!("Preview unavailable for {}", file_name) }</p>
            </div>
        },
    }
}
