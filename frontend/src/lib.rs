//! MediCitas 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，守卫与资料解析来自 `medicitas` 核心）
//! - `auth`: 会话状态到 Signal 的桥接
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod admin;
    pub mod doctores;
    pub mod especialidades;
    mod form_field;
    pub mod login;
    mod navbar;
    pub mod perfil;
    pub mod registro_doctor;
    pub mod registro_paciente;
    pub mod reserva;
    mod toast;
}
pub(crate) mod web;

use std::rc::Rc;

use crate::auth::{AuthContext, ClientHandle, init_auth};
use crate::components::admin::AdminPage;
use crate::components::doctores::DoctoresPage;
use crate::components::especialidades::EspecialidadesPage;
use crate::components::login::LoginPage;
use crate::components::perfil::PerfilPage;
use crate::components::registro_doctor::RegistroDoctorPage;
use crate::components::registro_paciente::RegistroPacientePage;
use crate::components::reserva::ReservaTurnoPage;

use leptos::prelude::*;
use medicitas::{ClientConfig, ClientContext, SystemClock};

pub use web::init_logging;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};
use web::{FetchHttpClient, LocalTokenStore};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::RegistroPaciente => view! { <RegistroPacientePage /> }.into_any(),
        AppRoute::RegistroDoctor => view! { <RegistroDoctorPage /> }.into_any(),
        AppRoute::Especialidades => view! { <EspecialidadesPage /> }.into_any(),
        AppRoute::Doctores => view! { <DoctoresPage /> }.into_any(),
        AppRoute::Paciente(id) | AppRoute::Doctor(id) => view! { <PerfilPage id=id /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::ReservaTurno(id) => view! { <ReservaTurnoPage doctor_id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 构建期注入的配置，未设置时使用默认值
fn build_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        match key {
            medicitas::config::VAR_API_URL => option_env!("MEDICITAS_API_URL"),
            medicitas::config::VAR_TOKEN_KEY => option_env!("MEDICITAS_TOKEN_KEY"),
            medicitas::config::VAR_PAGE_SIZE => option_env!("MEDICITAS_PAGE_SIZE"),
            _ => None,
        }
        .map(str::to_string)
    })
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装客户端服务；会话引导在构造时开始
    let config = build_config();
    let tokens = Rc::new(LocalTokenStore::new(config.token_storage_key.clone()));
    let ctx = ClientContext::new(config, Rc::new(FetchHttpClient), tokens, Rc::new(SystemClock));

    // 2. 认证上下文订阅会话状态
    let auth_ctx = AuthContext::new(&ctx.session);
    let client: ClientHandle = StoredValue::new_local(ctx);
    provide_context(client);
    provide_context(auth_ctx);

    // 3. 驱动首次引导
    init_auth(client, auth_ctx);

    view! {
        // 4. 路由器组件：注入客户端与认证上下文
        <Router client=client auth=auth_ctx>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
