//! Sweet Shop 前端应用
//!
//! 所有领域状态都由核心库的 [`ShopController`] 持有，
//! 组件只读取状态快照信号并把用户事件转发给控制器：
//! - `web`: 浏览器能力（fetch / LocalStorage / 原生对话框）
//! - `components`: UI 组件层

mod components {
    pub mod auth_panel;
    pub mod catalog;
    pub mod metrics_panel;
    pub mod status;
    pub mod sweet_card;
    pub mod sweet_form;
}

pub(crate) mod web {
    mod dialog;
    mod http;
    mod storage;

    pub use dialog::BrowserPrompter;
    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use crate::components::auth_panel::AuthPanel;
use crate::components::catalog::CatalogPage;
use crate::components::status::StatusToast;
use crate::web::{BrowserPrompter, BrowserStorage, FetchClient};

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;
use sweetshop::{ShopConfig, ShopController, ShopState};

pub type Controller = ShopController<FetchClient, BrowserStorage, BrowserPrompter>;

/// 应用上下文
///
/// 控制器不是 `Send` 的，因此放在本地存储的 `StoredValue` 中；
/// 状态快照通过普通信号分发给组件。
#[derive(Clone, Copy)]
pub struct ShopContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// 控制器状态快照（只读）
    pub state: ReadSignal<ShopState>,
}

impl ShopContext {
    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// 在浏览器事件循环中执行一个控制器操作
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move { action(controller).await });
    }
}

/// 从 Context 获取应用上下文
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::from_build_env();
    log::info!("API base: {}", config.api_base_url);

    // 1. 创建控制器（会话从 LocalStorage 恢复）
    let controller = Rc::new(ShopController::new(
        FetchClient,
        BrowserStorage,
        BrowserPrompter,
        &config,
    ));

    // 2. 每次状态变更都推送到快照信号
    let (state, set_state) = signal(controller.state());
    controller.subscribe(move |s| set_state.set(s.clone()));

    let ctx = ShopContext {
        controller: StoredValue::new_local(controller),
        state,
    };
    provide_context(ctx);

    // 3. 已恢复会话时立即加载数据
    ctx.run(|c| async move { c.start().await });

    let is_authenticated = move || state.with(|s| s.is_authenticated());

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <StatusToast />
            <Show when=is_authenticated fallback=|| view! { <AuthPanel /> }>
                <CatalogPage />
            </Show>
        </div>
    }
}
