use crate::use_shop;
use leptos::prelude::*;

/// 按分类的库存统计，无数据时不渲染
#[component]
pub fn MetricsPanel() -> impl IntoView {
    let state = use_shop().state;
    let metrics = move || state.with(|s| s.metrics.clone());

    view! {
        <Show when=move || state.with(|s| !s.metrics.is_empty())>
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <For
                    each=metrics
                    key=|row| row.category.clone()
                    children=|row| view! {
                        <div class="stat">
                            <div class="stat-title">{row.category}</div>
                            <div class="stat-value text-primary">{row.total_quantity}</div>
                            <div class="stat-desc">{format!("{} sweets in stock", row.sweet_count)}</div>
                        </div>
                    }
                />
            </div>
        </Show>
    }
}
