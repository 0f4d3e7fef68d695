use crate::components::metrics_panel::MetricsPanel;
use crate::components::sweet_card::SweetCard;
use crate::components::sweet_form::SweetForm;
use crate::use_shop;
use leptos::prelude::*;
use sweetshop::shared::SweetFilters;

/// 已登录后的主页面：导航栏、统计、筛选、商品列表
#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_shop();
    let state = ctx.state;

    let username = move || {
        state.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default())
    };
    let is_admin = move || state.with(|s| s.is_admin());
    let loading = move || state.with(|s| s.loading);
    let total = move || state.with(|s| s.count);

    let on_logout = move |_| ctx.controller().logout();

    view! {
        <div class="p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"Sweet Shop"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            "Signed in as " {username}
                        </span>
                        <Show when=is_admin>
                            <span class="badge badge-secondary">"admin"</span>
                        </Show>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Logout"
                        </button>
                    </div>
                </div>

                <MetricsPanel />

                <Show when=is_admin>
                    <SweetForm />
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <div>
                                <h3 class="card-title">"Catalog"</h3>
                                <p class="text-base-content/70 text-sm">
                                    {total} " sweets"
                                </p>
                            </div>
                            <Show when=loading>
                                <span class="loading loading-spinner loading-md"></span>
                            </Show>
                        </div>

                        <FilterBar />

                        <Show when=move || state.with(|s| s.sweets.is_empty()) && !loading()>
                            <div class="text-center py-8 text-base-content/50">
                                "No sweets match the current filters."
                            </div>
                        </Show>

                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                            <For
                                each=move || state.get().sweets
                                key=|sweet| {
                                    (sweet.id, sweet.name.clone(), sweet.category.clone(), sweet.description.clone(), sweet.price, sweet.quantity)
                                }
                                children=move |sweet| view! { <SweetCard sweet=sweet /> }
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 筛选栏，提交时按当前条件重新加载
#[component]
fn FilterBar() -> impl IntoView {
    let ctx = use_shop();
    let state = ctx.state;

    let field = move |read: fn(&SweetFilters) -> String| {
        move || state.with(|s| read(&s.filters))
    };

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.run(|c| async move { c.search().await });
    };

    let on_reset = move |_| ctx.run(|c| async move { c.reset_filters().await });

    view! {
        <form class="grid gap-2 md:grid-cols-5 items-end" on:submit=on_search>
            <input
                type="text"
                placeholder="Name"
                class="input input-bordered input-sm"
                prop:value=field(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.controller().edit_filters(|f| f.name = value);
                }
            />
            <input
                type="text"
                placeholder="Category"
                class="input input-bordered input-sm"
                prop:value=field(|f| f.category.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.controller().edit_filters(|f| f.category = value);
                }
            />
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Min price"
                class="input input-bordered input-sm"
                prop:value=field(|f| f.min_price.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.controller().edit_filters(|f| f.min_price = value);
                }
            />
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Max price"
                class="input input-bordered input-sm"
                prop:value=field(|f| f.max_price.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.controller().edit_filters(|f| f.max_price = value);
                }
            />
            <div class="join">
                <button
                    type="submit"
                    class="btn btn-primary btn-sm join-item"
                    disabled=move || state.with(|s| s.loading)
                >
                    "Search"
                </button>
                <button type="button" class="btn btn-ghost btn-sm join-item" on:click=on_reset>
                    "Reset"
                </button>
            </div>
        </form>
    }
}
