use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i> {" Weed Detection & Laser Targeting"}</h1>
            <p class="subtitle">{"Upload a field image to locate weeds and get laser coordinates"}</p>
        </header>
    }
}
