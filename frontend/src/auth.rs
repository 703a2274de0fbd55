//! 认证模块
//!
//! 把核心 `SessionState` 的可观察值桥接到 Leptos Signal。
//! 路由服务通过注入的 `AuthContext` 感知登录状态变化。

use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::forms::LoginForm;
use medicitas::{ClientContext, ClientResult, SessionState};
use medicitas_shared::UserProfile;

/// 客户端服务句柄
///
/// `ClientContext` 内部使用 `Rc`，只能放在本地存储的 arena 里。
pub type ClientHandle = StoredValue<ClientContext, LocalStorage>;

/// 认证上下文
///
/// 三个信号都由会话状态单向驱动，组件只读不写。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub logged_in: RwSignal<bool>,
    pub profile: RwSignal<Option<UserProfile>>,
    /// 首次会话引导是否已完成
    pub initialized: RwSignal<bool>,
}

impl AuthContext {
    /// 创建上下文并订阅会话状态
    pub fn new(session: &SessionState) -> Self {
        let ctx = Self {
            logged_in: RwSignal::new(session.is_logged_in()),
            profile: RwSignal::new(session.current_profile()),
            initialized: RwSignal::new(session.is_initialized()),
        };

        session.logged_in().subscribe(move |v| {
            let _ = ctx.logged_in.try_set(*v);
        });
        session.profile().subscribe(move |p| {
            let _ = ctx.profile.try_set(p.clone());
        });

        ctx
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn use_client() -> ClientHandle {
    use_context::<ClientHandle>().expect("ClientHandle should be provided")
}

/// 驱动首次会话引导，完成后标记 `initialized`
pub fn init_auth(client: ClientHandle, auth: AuthContext) {
    let init = client.with_value(|c| c.session.get_initialization());
    spawn_local(async move {
        init.await;
        let _ = auth.initialized.try_set(true);
        tracing::debug!(logged_in = auth.logged_in.get_untracked(), "session ready");
    });
}

/// 校验表单并登录
///
/// 校验失败时不发出任何请求。
pub async fn login(client: ClientHandle, form: LoginForm) -> ClientResult<UserProfile> {
    let credentials = form.validate()?;
    let session = client.with_value(|c| c.session.clone());
    session.login(credentials).await
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(client: ClientHandle) {
    client.with_value(|c| c.session.logout());
}
