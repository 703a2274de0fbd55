//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

use medicitas_shared::UserProfile;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    RegistroPaciente,
    /// 管理员注册医生 (需要认证)
    RegistroDoctor,
    Especialidades,
    Doctores,
    /// 患者首页 (需要认证 + 资料)
    Paciente(String),
    /// 医生首页 (需要认证 + 资料)
    Doctor(String),
    /// 管理面板 (需要认证 + 资料)
    Admin,
    /// 预约挂号 (需要认证)
    ReservaTurno(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["login"] => Self::Login,
            ["registro-paciente"] => Self::RegistroPaciente,
            ["registro-doctor"] => Self::RegistroDoctor,
            ["especialidades"] => Self::Especialidades,
            ["doctores"] => Self::Doctores,
            ["paciente", id] => Self::Paciente(id.to_string()),
            ["doctor", id] => Self::Doctor(id.to_string()),
            ["admin"] => Self::Admin,
            ["reserva-turno", id] => Self::ReservaTurno(id.to_string()),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::RegistroPaciente => "/registro-paciente".to_string(),
            Self::RegistroDoctor => "/registro-doctor".to_string(),
            Self::Especialidades => "/especialidades".to_string(),
            Self::Doctores => "/doctores".to_string(),
            Self::Paciente(id) => format!("/paciente/{}", id),
            Self::Doctor(id) => format!("/doctor/{}", id),
            Self::Admin => "/admin".to_string(),
            Self::ReservaTurno(id) => format!("/reserva-turno/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::RegistroDoctor
                | Self::Paciente(_)
                | Self::Doctor(_)
                | Self::Admin
                | Self::ReservaTurno(_)
        )
    }

    /// 进入前需要先解析出当前用户资料
    pub fn requires_profile(&self) -> bool {
        matches!(self, Self::Paciente(_) | Self::Doctor(_) | Self::Admin)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标：按角色进入各自首页
    pub fn auth_success_redirect(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(p) => Self::from_path(&p.home_path()),
            None => Self::Especialidades,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicitas_shared::Rol;

    #[test]
    fn parses_parameterized_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/doctor/5"), AppRoute::Doctor("5".into()));
        assert_eq!(AppRoute::from_path("/paciente/9/"), AppRoute::Paciente("9".into()));
        assert_eq!(
            AppRoute::from_path("/reserva-turno/3?x=1"),
            AppRoute::ReservaTurno("3".into())
        );
        assert_eq!(AppRoute::from_path("/doctor"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/doctor/5/extra"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip_through_display() {
        let route = AppRoute::ReservaTurno("17".into());
        assert_eq!(AppRoute::from_path(&route.to_string()), route);
    }

    #[test]
    fn protected_routes() {
        assert!(AppRoute::Admin.requires_auth());
        assert!(AppRoute::Admin.requires_profile());
        assert!(AppRoute::ReservaTurno("1".into()).requires_auth());
        assert!(!AppRoute::ReservaTurno("1".into()).requires_profile());
        assert!(!AppRoute::Doctores.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
    }

    #[test]
    fn success_redirect_follows_role() {
        let profile = UserProfile {
            id: "5".into(),
            usuario_id: "12".into(),
            dni: "30111222".into(),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: String::new(),
            tipo: Rol::Doctor,
            telefono: None,
            fecha_nacimiento: None,
            matricula: Some("MP-1".into()),
        };
        assert_eq!(
            AppRoute::auth_success_redirect(Some(&profile)),
            AppRoute::Doctor("5".into())
        );

        let admin = UserProfile {
            tipo: Rol::Admin,
            ..profile
        };
        assert_eq!(AppRoute::auth_success_redirect(Some(&admin)), AppRoute::Admin);
        assert_eq!(AppRoute::auth_success_redirect(None), AppRoute::Especialidades);
    }
}
