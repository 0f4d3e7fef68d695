use crate::use_shop;
use leptos::prelude::*;
use sweetshop::AuthMode;

/// 登录 / 注册表单
#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = use_shop();
    let state = ctx.state;
    let (is_submitting, set_is_submitting) = signal(false);

    let mode = move || state.with(|s| s.auth_mode);
    let is_register = move || mode() == AuthMode::Register;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        ctx.run(move |c| async move {
            c.submit_auth().await;
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Sweet Shop"</h1>
                    <p class="text-base-content/70">
                        {move || if is_register() {
                            "Create an account to manage the catalog"
                        } else {
                            "Sign in to browse and manage sweets"
                        }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.controller().edit_auth_form(|f| f.username = value);
                                }
                                prop:value=move || state.with(|s| s.auth_form.username.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=is_register>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        ctx.controller().edit_auth_form(|f| f.email = value);
                                    }
                                    prop:value=move || state.with(|s| s.auth_form.email.clone())
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ctx.controller().edit_auth_form(|f| f.password = value);
                                }
                                prop:value=move || state.with(|s| s.auth_form.password.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                } else {
                                    mode().label().into_any()
                                }}
                            </button>
                        </div>
                        <button
                            type="button"
                            class="btn btn-link btn-sm"
                            on:click=move |_| ctx.controller().toggle_auth_mode()
                        >
                            {move || if is_register() {
                                "Already have an account? Login"
                            } else {
                                "Need an account? Register"
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
