//! MediCitas 共享类型
//!
//! 客户端核心与前端共用的纯数据层，不依赖任何浏览器 API：
//! - `auth` / `doctor` / `paciente` / `especialidad`: API 原始结构与扁平化视图模型
//! - `catalog`: 内存中的分组、过滤与分页
//! - `protocol`: REST 端点描述
//! - `date`: 毫秒时间戳

pub mod auth;
pub mod catalog;
pub mod collate;
pub mod date;
pub mod doctor;
pub mod especialidad;
pub mod id;
pub mod paciente;
pub mod protocol;

pub use auth::{
    ApiUserProfile, DoctorProfile, LoginRequest, LoginResponse, PacienteProfile,
    ResetPasswordRequest, Rol, UserProfile, Usuario,
};
pub use catalog::{DoctorFilter, DoctorListState, EspecialidadConDoctores, Paginator};
pub use date::Timestamp;
pub use doctor::{ApiDoctorResponse, Doctor, EstadoDoctor, RegistroDoctorRequest};
pub use especialidad::Especialidad;
pub use paciente::{ApiPacienteResponse, Paciente, RegistroPacienteRequest};

// =========================================================
// 常量 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_ESPECIALIDAD_DESCRIPCION: &str = "Especialidad médica profesional";

/// 生成 Bearer 认证头的值
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
