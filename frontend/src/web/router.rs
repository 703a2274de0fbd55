//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 等待会话引导 -> 守卫 -> 解析资料 -> 加载"。
//! 守卫与资料解析本身在 `medicitas` 核心中实现，这里只负责把结果落到 Signal 上。

use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::GuardDecision;
use medicitas_shared::UserProfile;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::auth::{AuthContext, ClientHandle};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// popstate 触发：浏览器已经改好了地址栏
    Keep,
}

/// 路由器服务
///
/// `current_route` 为 None 表示首次导航的守卫还未给出结论。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<Option<AppRoute>>,
    /// 进入需要资料的页面时由解析器给出的资料
    resolved_profile: RwSignal<Option<UserProfile>>,
    /// 导航序号：较晚发起的导航覆盖仍在等待守卫的较早导航
    seq: StoredValue<u64>,
    client: ClientHandle,
    auth: AuthContext,
}

impl RouterService {
    fn new(client: ClientHandle, auth: AuthContext) -> Self {
        Self {
            current_route: RwSignal::new(None),
            resolved_profile: RwSignal::new(None),
            seq: StoredValue::new(0),
            client,
            auth,
        }
    }

    /// 当前路由；首次守卫完成前为 None
    pub fn current_route(&self) -> Signal<Option<AppRoute>> {
        self.current_route.into()
    }

    pub fn resolved_profile(&self) -> Signal<Option<UserProfile>> {
        self.resolved_profile.into()
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), HistoryMode::Push);
    }

    fn next_seq(&self) -> u64 {
        self.seq.update_value(|s| *s += 1);
        self.seq.get_value()
    }

    fn commit(&self, route: AppRoute, mode: HistoryMode) {
        match mode {
            HistoryMode::Push => push_history_state(&route.to_path()),
            HistoryMode::Replace => replace_history_state(&route.to_path()),
            HistoryMode::Keep => {}
        }
        tracing::debug!(route = %route, "route committed");
        self.current_route.set(Some(route));
    }

    fn navigate_to_route(&self, target: AppRoute, mode: HistoryMode) {
        let seq = self.next_seq();
        let router = *self;

        // --- 公开页面：直接加载 ---
        if !target.requires_auth() && !target.should_redirect_when_authenticated() {
            self.commit(target, mode);
            return;
        }

        let ctx = self.client.get_value();
        spawn_local(async move {
            // --- 已登录用户访问登录页：送回各自首页 ---
            if target.should_redirect_when_authenticated() {
                ctx.session.get_initialization().await;
                if router.seq.get_value() != seq {
                    return;
                }
                if ctx.session.is_logged_in() {
                    let redirect = AppRoute::auth_success_redirect(ctx.session.current_profile().as_ref());
                    tracing::info!(to = %redirect, "already authenticated, redirecting");
                    router.commit(redirect, HistoryMode::Replace);
                } else {
                    router.commit(target, mode);
                }
                return;
            }

            // --- 受保护页面：守卫先等待会话引导 ---
            let path = target.to_path();
            let decision = ctx.guard.check(&path).await;
            let profile = match (&decision, target.requires_profile()) {
                (GuardDecision::Allow, true) => ctx.resolver.resolve().await,
                _ => None,
            };

            if router.seq.get_value() != seq {
                tracing::debug!(path = %path, "navigation superseded");
                return;
            }

            match decision {
                GuardDecision::Allow => {
                    router.resolved_profile.set(profile);
                    router.commit(target, mode);
                }
                GuardDecision::Redirect(to) => {
                    tracing::info!(from = %path, to = %to, "access denied, redirecting");
                    let mode = if mode == HistoryMode::Push {
                        HistoryMode::Push
                    } else {
                        HistoryMode::Replace
                    };
                    router.commit(AppRoute::from_path(&to), mode);
                }
            }
        });
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to_route(AppRoute::from_path(&current_path()), HistoryMode::Keep);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登录状态变化时重新评估当前页面
    fn setup_auth_redirect(&self) {
        let router = *self;
        let logged_in = self.auth.logged_in;

        Effect::new(move |prev: Option<bool>| {
            let is_auth = logged_in.get();
            if prev.is_some_and(|p| p != is_auth) {
                if let Some(route) = router.current_route.get_untracked() {
                    let stale = if is_auth {
                        route.should_redirect_when_authenticated()
                    } else {
                        route.requires_auth()
                    };
                    if stale {
                        tracing::debug!(logged_in = is_auth, route = %route, "auth state changed");
                        router.navigate_to_route(route, HistoryMode::Replace);
                    }
                }
            }
            is_auth
        });
    }
}

/// 提供路由服务到 Context 并执行首次导航
fn provide_router(client: ClientHandle, auth: AuthContext) -> RouterService {
    let router = RouterService::new(client, auth);

    router.init_popstate_listener();
    router.setup_auth_redirect();
    router.navigate_to_route(AppRoute::from_path(&current_path()), HistoryMode::Replace);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(client: ClientHandle, auth: AuthContext, children: Children) -> impl IntoView {
    provide_router(client, auth);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件；首次守卫完成前显示加载指示。
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || match router.current_route().get() {
        Some(route) => matcher(route),
        None => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 客户端导航链接
#[component]
pub fn Link(#[prop(into)] to: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
