//! 认证模块
//!
//! 把核心库的会话控制器桥接到 Leptos 信号。
//! 控制器是唯一数据源，信号只是它的订阅者；路由服务通过注入的会话信号做守卫。

use crate::web::{BrowserStorage, FetchHttpClient};
use charger_club::{ApiConfig, ChargerApi, ClubService, Session};
use leptos::prelude::*;
use std::rc::Rc;

pub type AppService = ClubService<FetchHttpClient, BrowserStorage, BrowserStorage>;

/// 认证上下文
///
/// 包含会话读写信号和服务实例，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话快照（只读）
    pub state: ReadSignal<Session>,
    service: StoredValue<Rc<AppService>, LocalStorage>,
    /// 注册后等待确认的邮箱
    pub pending_email: RwSignal<Option<String>>,
}

impl AuthContext {
    /// 创建服务并订阅会话变化
    pub fn new() -> Self {
        let config = ApiConfig::from_env_value(option_env!("CHARGER_API_URL"));
        let api = ChargerApi::new(config, FetchHttpClient);
        log::info!("using API at {}", api.config().base_url());

        let service = Rc::new(ClubService::new(
            api,
            BrowserStorage::Local,
            BrowserStorage::Session,
        ));

        let (state, set_state) = signal(service.snapshot());
        service
            .session()
            .subscribe(move |session| set_state.set(session.clone()));

        Self {
            state,
            service: StoredValue::new_local(service),
            pending_email: RwSignal::new(None),
        }
    }

    /// 获取服务实例（供异步任务持有）
    pub fn service(&self) -> Rc<AppService> {
        self.service.get_value()
    }

    /// 会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.get())
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(Session::is_authenticated))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时从 localStorage 恢复会话
pub fn init_auth(ctx: &AuthContext) {
    ctx.service().session().restore();
}

/// 注销，守卫会把受保护页面重定向到登录页
pub fn logout(ctx: &AuthContext) -> charger_club::AppRoute {
    ctx.service().sign_out()
}
