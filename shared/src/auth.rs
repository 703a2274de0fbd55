//! 认证相关的领域模型
//!
//! `ApiUserProfile` 是 `/auth/perfil` 与 `/auth/login` 返回的嵌套结构，
//! `UserProfile` 是视图层使用的扁平化版本。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::fecha;
use crate::id;

// =========================================================
// 角色 (Rol)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    #[default]
    Paciente,
    Doctor,
    Admin,
}

impl Rol {
    pub const ALL: [Rol; 3] = [Rol::Paciente, Rol::Doctor, Rol::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Paciente => "paciente",
            Rol::Doctor => "doctor",
            Rol::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// 登录页选择器上的文案
    pub fn label(&self) -> &'static str {
        match self {
            Rol::Paciente => "Soy Paciente",
            Rol::Doctor => "Soy Doctor",
            Rol::Admin => "Soy Admin",
        }
    }

    /// 登录成功后按角色跳转的首页
    pub fn home_path(&self, profile_id: &str) -> String {
        match self {
            Rol::Paciente => format!("/paciente/{}", profile_id),
            Rol::Doctor => format!("/doctor/{}", profile_id),
            Rol::Admin => "/admin".to_string(),
        }
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// API 原始结构
// =========================================================

/// 账户基础记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub dni: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub nombre: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub apellido: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub tipo: Rol,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacienteProfile {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::optional")]
    pub usuario_id: Option<String>,
    #[serde(default, deserialize_with = "id::nullable")]
    pub telefono: String,
    #[serde(
        rename = "fechaNacimiento",
        default,
        with = "fecha::option"
    )]
    pub fecha_nacimiento: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::optional")]
    pub usuario_id: Option<String>,
    #[serde(default, deserialize_with = "id::nullable")]
    pub telefono: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub matricula: String,
}

/// `/auth/perfil` 的完整响应：账户字段 + 按角色出现的子记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiUserProfile {
    #[serde(flatten)]
    pub usuario: Usuario,
    #[serde(rename = "Paciente", default, skip_serializing_if = "Option::is_none")]
    pub paciente: Option<PacienteProfile>,
    #[serde(rename = "Doctor", default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorProfile>,
}

// =========================================================
// 请求 / 响应
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub dni: String,
    pub password: String,
    pub tipo: Rol,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: ApiUserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub dni: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

// =========================================================
// 扁平化视图模型
// =========================================================

/// 视图层使用的用户资料
///
/// `id` 为角色记录的 id（存在对应子记录时），否则为账户 id；
/// `usuario_id` 始终是账户 id。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub usuario_id: String,
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub tipo: Rol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(
        rename = "fechaNacimiento",
        default,
        skip_serializing_if = "Option::is_none",
        with = "fecha::option"
    )]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
}

impl UserProfile {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    /// 该用户登录后的首页路径
    pub fn home_path(&self) -> String {
        self.tipo.home_path(&self.id)
    }
}

impl From<ApiUserProfile> for UserProfile {
    fn from(api: ApiUserProfile) -> Self {
        let ApiUserProfile {
            usuario,
            paciente,
            doctor,
        } = api;

        let mut profile = UserProfile {
            id: usuario.id.clone(),
            usuario_id: usuario.id,
            dni: usuario.dni,
            nombre: usuario.nombre,
            apellido: usuario.apellido,
            email: usuario.email,
            tipo: usuario.tipo,
            telefono: None,
            fecha_nacimiento: None,
            matricula: None,
        };

        // 只合并与角色标签匹配的子记录
        match (usuario.tipo, paciente, doctor) {
            (Rol::Paciente, Some(p), _) => {
                profile.id = p.id;
                profile.telefono = Some(p.telefono);
                profile.fecha_nacimiento = p.fecha_nacimiento;
            }
            (Rol::Doctor, _, Some(d)) => {
                profile.id = d.id;
                profile.telefono = Some(d.telefono);
                profile.matricula = Some(d.matricula);
            }
            _ => {}
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doctor_payload() -> serde_json::Value {
        json!({
            "id": 12,
            "dni": "30111222",
            "nombre": "Ana",
            "apellido": "Pérez",
            "email": "ana@clinica.test",
            "tipo": "doctor",
            "Doctor": { "id": 5, "usuario_id": 12, "telefono": "111", "matricula": "MP-778" }
        })
    }

    #[test]
    fn doctor_profile_carries_matricula_only() {
        let api: ApiUserProfile = serde_json::from_value(doctor_payload()).unwrap();
        let profile = UserProfile::from(api);

        assert_eq!(profile.id, "5");
        assert_eq!(profile.usuario_id, "12");
        assert_eq!(profile.tipo, Rol::Doctor);
        assert_eq!(profile.matricula.as_deref(), Some("MP-778"));
        assert!(profile.fecha_nacimiento.is_none());

        let flat = serde_json::to_value(&profile).unwrap();
        assert!(flat.get("matricula").is_some());
        assert!(flat.get("fechaNacimiento").is_none());
    }

    #[test]
    fn paciente_profile_carries_birthdate_only() {
        let api: ApiUserProfile = serde_json::from_value(json!({
            "id": 3,
            "dni": "40123456",
            "nombre": "Luis",
            "apellido": "Gómez",
            "email": "luis@mail.test",
            "tipo": "paciente",
            "Paciente": { "id": 9, "telefono": "222", "fechaNacimiento": "1990-05-01T00:00:00.000Z" }
        }))
        .unwrap();
        let profile = UserProfile::from(api);

        assert_eq!(profile.id, "9");
        assert_eq!(profile.telefono.as_deref(), Some("222"));
        assert_eq!(
            profile.fecha_nacimiento,
            NaiveDate::from_ymd_opt(1990, 5, 1)
        );
        assert!(profile.matricula.is_none());

        let flat = serde_json::to_value(&profile).unwrap();
        assert_eq!(flat["fechaNacimiento"], "1990-05-01");
        assert!(flat.get("matricula").is_none());
    }

    #[test]
    fn mismatched_sub_record_is_ignored() {
        let mut payload = doctor_payload();
        payload["tipo"] = json!("admin");
        let profile = UserProfile::from(serde_json::from_value::<ApiUserProfile>(payload).unwrap());

        assert_eq!(profile.id, "12");
        assert!(profile.matricula.is_none());
        assert!(profile.telefono.is_none());
        assert_eq!(profile.home_path(), "/admin");
    }

    #[test]
    fn home_paths_by_role() {
        assert_eq!(Rol::Paciente.home_path("9"), "/paciente/9");
        assert_eq!(Rol::Doctor.home_path("5"), "/doctor/5");
        assert_eq!(Rol::parse("doctor"), Some(Rol::Doctor));
        assert_eq!(Rol::parse("enfermero"), None);
    }
}
