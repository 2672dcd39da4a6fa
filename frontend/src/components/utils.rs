use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::UploadCandidate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FileList, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions};

/// First image in a drop or paste, if any.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .find(|file| upload_candidate(file).is_image())
}

pub fn upload_candidate(file: &GlooFile) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.size(), file.raw_mime_type())
}

pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn scroll_into_view_smooth(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn click_element_by_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(input) = element {
        if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
            html_input.click();
        }
    }
}

/// Saves `contents` through a temporary object URL and anchor click.
pub fn download_text(file_name: &str, contents: &str, mime_type: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let url = ObjectUrl::from(Blob::new_with_options(contents, Some(mime_type)));
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoking right away can cancel the download in some browsers.
    Timeout::new(1_000, move || drop(url)).forget();
    Ok(())
}
