use crate::use_shop;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// 状态消息自动消失的时间
const STATUS_TIMEOUT_MS: u32 = 4_000;

/// 单条状态消息提示框
#[component]
pub fn StatusToast() -> impl IntoView {
    let ctx = use_shop();
    let status = Memo::new(move |_| ctx.state.with(|s| s.status.clone()));

    // 消息出现后定时清除；期间被新消息替换时不清除新消息
    Effect::new(move |_| {
        if let Some(message) = status.get() {
            Timeout::new(STATUS_TIMEOUT_MS, move || {
                if status.get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.controller().clear_status();
                }
            })
            .forget();
        }
    });

    view! {
        <Show when=move || status.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-info shadow-lg">
                    <span>{move || status.get().unwrap_or_default()}</span>
                    <button
                        class="btn btn-ghost btn-xs"
                        on:click=move |_| ctx.controller().clear_status()
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
    }
}
