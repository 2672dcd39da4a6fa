use super::super::Model;
use super::super::Msg;
use shared::{DetectionReport, TargetRecord};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let report = model.session.visible_report();

    html! {
        <section
            id="results"
            ref={model.results_ref.clone()}
            class={classes!("results-container", report.is_none().then_some("hidden"))}
        >
            { report.map(|r| render_report(r, ctx)).unwrap_or_else(|| html! {}) }
        </section>
    }
}

fn render_report(report: &DetectionReport, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <div class="result-header">
                <h2><i class="fa-solid fa-crosshairs"></i>{" Detection Results"}</h2>
                <div class="weed-count">
                    {"Weeds detected: "}
                    <span id="weedCount">{ report.weed_count.to_string() }</span>
                </div>
            </div>
            <div class="result-image">
                <img id="resultImg" src={report.result_image.clone()} alt="Detection result" />
            </div>
            <div class="coordinates">
                <div class="coordinates-header">
                    <h3>{"Laser Coordinates"}</h3>
                    <button
                        type="button"
                        class="analyze-btn"
                        disabled={report.targets.is_empty()}
                        onclick={link.callback(|_| Msg::ExportCoordinates)}
                    >
                        <i class="fa-solid fa-download"></i>{" Export coordinates"}
                    </button>
                </div>
                <div id="coordinatesList" class="coordinates-list">
                    { for report.targets.iter().map(render_target_card) }
                </div>
            </div>
        </>
    }
}

fn render_target_card(target: &TargetRecord) -> Html {
    html! {
        <div class="coordinate-card">
            <h4>{ format!("Target #{}", target.target_id) }</h4>
            <p><strong>{"X:"}</strong>{ format!(" {} mm", target.x) }</p>
            <p><strong>{"Y:"}</strong>{ format!(" {} mm", target.y) }</p>
            <p><strong>{"Class:"}</strong>{ format!(" {}", target.class_name) }</p>
            <p><strong>{"Confidence:"}</strong>{ format!(" {}", target.confidence_percent()) }</p>
        </div>
    }
}
