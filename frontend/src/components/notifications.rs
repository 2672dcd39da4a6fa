use super::super::Model;
use super::super::Msg;
use shared::{Notice, NoticeLevel};
use yew::prelude::*;

pub fn render_notifications(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div id="notifications" class="notifications" role="status" aria-live="polite">
            { for model.notices.notices().iter().map(|notice| render_notice(notice, ctx)) }
        </div>
    }
}

fn render_notice(notice: &Notice, ctx: &Context<Model>) -> Html {
    let id = notice.id;
    let icon = match notice.level {
        NoticeLevel::Info => "fa-solid fa-circle-info",
        NoticeLevel::Warning => "fa-solid fa-triangle-exclamation",
        NoticeLevel::Error => "fa-solid fa-circle-exclamation",
    };

    html! {
        <div
            key={id.to_string()}
            class={notice.css_class()}
            data-kind={notice.kind.map(|k| k.as_ref().to_string())}
        >
            <i class={icon}></i>
            <p>{ &notice.message }</p>
            <button
                class="remove-btn"
                title="Dismiss"
                onclick={ctx.link().callback(move |_| Msg::DismissNotice(id))}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
