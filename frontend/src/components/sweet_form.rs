//! 商品表单组件
//!
//! 新增与编辑共用同一个表单，模式由控制器中的编辑目标决定。
//! 数值字段保存原始输入，提交时由控制器解析。

use crate::use_shop;
use leptos::prelude::*;
use sweetshop::SweetForm as FormState;

#[component]
pub fn SweetForm() -> impl IntoView {
    let ctx = use_shop();
    let state = ctx.state;
    let (is_submitting, set_is_submitting) = signal(false);

    let is_editing = move || state.with(|s| s.is_editing());
    let field = move |read: fn(&FormState) -> String| move || state.with(|s| read(&s.sweet_form));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        ctx.run(move |c| async move {
            c.submit_sweet().await;
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-2" on:submit=on_submit>
                <h3 class="card-title">
                    {move || if is_editing() { "Edit sweet" } else { "Add sweet" }}
                </h3>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="sweet_name" class="label">
                            <span class="label-text">"Name"</span>
                        </label>
                        <input id="sweet_name" required
                            type="text"
                            placeholder="Gulab Jamun"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.controller().edit_sweet_form(|f| f.name = value);
                            }
                            prop:value=field(|f| f.name.clone())
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="sweet_category" class="label">
                            <span class="label-text">"Category"</span>
                        </label>
                        <input id="sweet_category" required
                            type="text"
                            placeholder="Indian"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.controller().edit_sweet_form(|f| f.category = value);
                            }
                            prop:value=field(|f| f.category.clone())
                            class="input input-bordered w-full"
                        />
                    </div>
                </div>

                <div class="form-control">
                    <label for="sweet_description" class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea id="sweet_description"
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.controller().edit_sweet_form(|f| f.description = value);
                        }
                        prop:value=field(|f| f.description.clone())
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="sweet_price" class="label">
                            <span class="label-text">"Price"</span>
                        </label>
                        <input id="sweet_price" required
                            type="number"
                            min="0"
                            step="0.01"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.controller().edit_sweet_form(|f| f.price = value);
                            }
                            prop:value=field(|f| f.price.clone())
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="sweet_quantity" class="label">
                            <span class="label-text">"Quantity"</span>
                        </label>
                        <input id="sweet_quantity" required
                            type="number"
                            min="0"
                            step="1"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.controller().edit_sweet_form(|f| f.quantity = value);
                            }
                            prop:value=field(|f| f.quantity.clone())
                            class="input input-bordered w-full"
                        />
                    </div>
                </div>

                <div class="card-actions justify-end">
                    <Show when=is_editing>
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| ctx.controller().cancel_edit()
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                        {move || match (is_submitting.get(), is_editing()) {
                            (true, _) => view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any(),
                            (false, true) => "Update".into_any(),
                            (false, false) => "Create".into_any(),
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
