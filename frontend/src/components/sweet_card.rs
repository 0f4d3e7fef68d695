use crate::use_shop;
use leptos::prelude::*;
use sweetshop::shared::Sweet;

/// 单个商品卡片
///
/// 购买对所有用户开放；编辑、补货、删除只对管理员显示。
#[component]
pub fn SweetCard(sweet: Sweet) -> impl IntoView {
    let ctx = use_shop();
    let id = sweet.id;
    let sold_out = !sweet.in_stock();
    let is_admin = move || ctx.state.with(|s| s.is_admin());

    let on_purchase = move |_| ctx.run(move |c| async move { c.purchase(id).await });
    let on_restock = move |_| ctx.run(move |c| async move { c.restock(id).await });
    let on_delete = move |_| ctx.run(move |c| async move { c.delete(id).await });
    let on_edit = {
        let sweet = sweet.clone();
        move |_| ctx.controller().begin_edit(&sweet)
    };

    view! {
        <div class="card card-compact bg-base-200">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <h4 class="card-title">{sweet.name.clone()}</h4>
                    <div class="badge badge-accent badge-outline">{sweet.category.clone()}</div>
                </div>
                <p class="text-sm text-base-content/70">{sweet.description.clone()}</p>
                <div class="flex items-center justify-between font-mono">
                    <span class="text-lg font-bold">{format!("₹{}", sweet.price)}</span>
                    <span class={if sold_out { "text-error" } else { "text-success" }}>
                        {if sold_out {
                            "Out of stock".to_string()
                        } else {
                            format!("{} in stock", sweet.quantity)
                        }}
                    </span>
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary btn-sm" disabled=sold_out on:click=on_purchase>
                        "Purchase"
                    </button>
                    <Show when=is_admin>
                        <button class="btn btn-ghost btn-sm" on:click=on_edit.clone()>"Edit"</button>
                        <button class="btn btn-ghost btn-sm" on:click=on_restock>"Restock"</button>
                        <button class="btn btn-ghost btn-sm text-error" on:click=on_delete>"Delete"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
