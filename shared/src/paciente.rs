//! 患者模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::fecha;
use crate::{Rol, Usuario, id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPacienteResponse {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::optional")]
    pub usuario_id: Option<String>,
    #[serde(default, deserialize_with = "id::nullable")]
    pub telefono: String,
    #[serde(rename = "fechaNacimiento", default, with = "fecha::option")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(rename = "Usuario")]
    pub usuario: Usuario,
}

/// 扁平化的患者记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paciente {
    pub id: String,
    pub usuario_id: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub dni: String,
    pub telefono: String,
    #[serde(
        rename = "fechaNacimiento",
        default,
        skip_serializing_if = "Option::is_none",
        with = "fecha::option"
    )]
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl From<ApiPacienteResponse> for Paciente {
    fn from(p: ApiPacienteResponse) -> Self {
        Paciente {
            id: p.id,
            usuario_id: p.usuario_id.unwrap_or_else(|| p.usuario.id.clone()),
            nombre: p.usuario.nombre,
            apellido: p.usuario.apellido,
            email: p.usuario.email,
            dni: p.usuario.dni,
            telefono: p.telefono,
            fecha_nacimiento: p.fecha_nacimiento,
        }
    }
}

// =========================================================
// 请求体
// =========================================================

/// 患者自助注册（`POST /pacientes/registro`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistroPacienteRequest {
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub telefono: String,
    #[serde(rename = "fechaNacimiento")]
    pub fecha_nacimiento: String,
    pub email: String,
    pub password: String,
    pub tipo: Rol,
}

impl RegistroPacienteRequest {
    pub fn new() -> Self {
        Self {
            tipo: Rol::Paciente,
            ..Default::default()
        }
    }
}

/// 患者联系方式更新（`PUT /pacientes/:id`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualizarPacienteRequest {
    pub email: String,
    pub telefono: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_nested_paciente() {
        let api: ApiPacienteResponse = serde_json::from_value(json!({
            "id": 11,
            "usuario_id": 30,
            "telefono": "3511234567",
            "fechaNacimiento": "1985-12-24",
            "Usuario": {
                "id": 30, "dni": "28999111", "nombre": "Eva", "apellido": "Luna",
                "email": "eva@mail.test", "tipo": "paciente"
            }
        }))
        .unwrap();

        let paciente = Paciente::from(api);
        assert_eq!(paciente.id, "11");
        assert_eq!(paciente.usuario_id, "30");
        assert_eq!(paciente.dni, "28999111");
        assert_eq!(paciente.fecha_nacimiento, NaiveDate::from_ymd_opt(1985, 12, 24));
    }

    #[test]
    fn registro_request_carries_paciente_role() {
        let body = serde_json::to_value(RegistroPacienteRequest::new()).unwrap();
        assert_eq!(body["tipo"], "paciente");
        assert!(body.get("fechaNacimiento").is_some());
    }
}
