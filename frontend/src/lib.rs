//! SocialCharger Club 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `auth`: 会话控制器与 Leptos 信号的桥接
//! - `web::router`: 路由服务，执行核心库的路由守卫
//! - `components`: 页面与 UI 组件

mod auth;
mod components {
    mod alert;
    pub mod charging_map;
    pub mod confirm_account;
    pub mod header;
    pub mod home;
    mod icons;
    pub mod my_account;
    pub mod new_user_details;
    pub mod sign_in;
    pub mod sign_up;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::charging_map::ChargingMapPage;
use crate::components::confirm_account::ConfirmAccountPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::my_account::MyAccountPage;
use crate::components::new_user_details::NewUserDetailsPage;
use crate::components::sign_in::SignInPage;
use crate::components::sign_up::SignUpPage;

use charger_club::AppRoute;
use leptos::prelude::*;

// 浏览器原生 API 的轻量级封装
pub(crate) mod web {
    mod http;
    pub mod map;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::ConfirmAccount => view! { <ConfirmAccountPage /> }.into_any(),
        AppRoute::NewUserDetails => view! { <NewUserDetailsPage /> }.into_any(),
        AppRoute::ChargingMap => view! { <ChargingMapPage /> }.into_any(),
        AppRoute::MyAccount => view! { <MyAccountPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 从 localStorage 恢复会话
    init_auth(&auth_ctx);

    // 3. 会话信号注入路由服务
    let session = auth_ctx.session_signal();

    view! {
        <Router session=session>
            <Header />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
