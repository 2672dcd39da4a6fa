use super::super::Model;
use super::super::Msg;
use super::preview_area::render_preview_area;
use super::utils::click_element_by_id;
use gloo_file::File as GlooFile;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const FILE_INPUT_ID: &str = "fileInput";

pub fn render_upload_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let submitting = model.session.is_submitting();

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="upload-section">
            <form id="uploadForm" onsubmit={handle_submit}>
                { render_file_input_area(model, ctx) }
                { render_preview_area(model) }
                <div class="button-container">
                    <button
                        type="submit"
                        class="analyze-btn"
                        disabled={submitting}
                    >
                        {
                            if submitting {
                                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Detecting..."}</> }
                            } else {
                                html! { <><i class="fa-solid fa-crosshairs"></i>{" Detect Weeds"}</> }
                            }
                        }
                    </button>
                    if submitting {
                        <button
                            type="button"
                            class="analyze-btn cancel-btn"
                            title="Cancel (Esc)"
                            onclick={link.callback(|_| Msg::CancelSubmission)}
                        >
                            <i class="fa-solid fa-xmark"></i>{" Cancel"}
                        </button>
                    }
                </div>
            </form>
            { render_loading(model) }
        </section>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|files| files.item(0))
            .map(GlooFile::from);

        input.set_value("");
        file.map(Msg::FileSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                name="file"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={Callback::from(|_: MouseEvent| click_element_by_id(FILE_INPUT_ID))}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop an image here, paste, or click"}</p>
                    <p class="file-types">{"Supported formats: PNG, JPG, JPEG, BMP, TIFF (max 16 MB)"}</p>
                </div>
            </div>
        </>
    }
}

fn render_loading(model: &Model) -> Html {
    html! {
        <div
            id="loading"
            class={classes!("loading", (!model.session.loading_visible()).then_some("hidden"))}
        >
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Processing image..."}</p>
        </div>
    }
}
