//! 医生模型
//!
//! `ApiDoctorResponse` 为 `/doctores` 系列端点返回的嵌套结构，
//! 视图层通过 `Doctor::from` 得到扁平记录。

use serde::{Deserialize, Serialize};

use crate::especialidad::Especialidad;
use crate::{Usuario, id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EstadoDoctor {
    #[default]
    Activo,
    Inactivo,
}

/// 嵌套的专科引用，可能缺失或为 null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EspecialidadRef {
    #[serde(alias = "_id", default, deserialize_with = "id::optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "id::nullable")]
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDoctorResponse {
    #[serde(deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::optional")]
    pub usuario_id: Option<String>,
    #[serde(rename = "especialidadId", default, deserialize_with = "id::optional")]
    pub especialidad_id: Option<String>,
    #[serde(default, deserialize_with = "id::nullable")]
    pub matricula: String,
    #[serde(rename = "precioConsulta", default, deserialize_with = "id::nullable")]
    pub precio_consulta: f64,
    #[serde(default, deserialize_with = "id::nullable")]
    pub telefono: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub estado: EstadoDoctor,
    #[serde(default)]
    pub disponibilidad: serde_json::Value,
    #[serde(rename = "Usuario")]
    pub usuario: Usuario,
    #[serde(rename = "Especialidad", default)]
    pub especialidad: Option<EspecialidadRef>,
}

/// 扁平化的医生记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub usuario_id: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub especialidad: Especialidad,
    pub telefono: String,
    pub matricula: String,
    #[serde(rename = "precioConsulta")]
    pub precio_consulta: f64,
    pub estado: EstadoDoctor,
}

impl Doctor {
    /// 列表卡片上显示的名字
    pub fn nombre_completo(&self) -> String {
        format!("Dr. {} {}", self.nombre, self.apellido)
    }

    /// 姓或名包含查询串（不区分大小写）
    pub fn matches_nombre(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.nombre.to_lowercase().contains(&query) || self.apellido.to_lowercase().contains(&query)
    }
}

impl From<ApiDoctorResponse> for Doctor {
    fn from(d: ApiDoctorResponse) -> Self {
        // 专科 id 优先取嵌套对象，其次取外键字段
        let (esp_id, esp_nombre) = match d.especialidad {
            Some(esp) => (esp.id.or(d.especialidad_id), esp.nombre),
            None => (d.especialidad_id, String::new()),
        };

        Doctor {
            id: d.id,
            // 账户 id 以嵌套的 Usuario 为准
            usuario_id: d.usuario.id.clone(),
            nombre: d.usuario.nombre,
            apellido: d.usuario.apellido,
            email: d.usuario.email,
            especialidad: Especialidad::new(esp_id.unwrap_or_default(), esp_nombre),
            telefono: d.telefono,
            matricula: d.matricula,
            precio_consulta: d.precio_consulta,
            estado: d.estado,
        }
    }
}

// =========================================================
// 请求体
// =========================================================

/// 管理员注册医生（`POST /doctores`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistroDoctorRequest {
    pub dni: String,
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub matricula: String,
    #[serde(rename = "especialidadId")]
    pub especialidad_id: String,
    #[serde(rename = "precioConsulta")]
    pub precio_consulta: f64,
    pub tipo: crate::Rol,
}

impl RegistroDoctorRequest {
    pub fn new() -> Self {
        Self {
            tipo: crate::Rol::Doctor,
            ..Default::default()
        }
    }
}

/// 医生资料更新（`PUT /doctores/:id`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActualizarDoctorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(rename = "precioConsulta", skip_serializing_if = "Option::is_none")]
    pub precio_consulta: Option<f64>,
    #[serde(rename = "especialidadId", skip_serializing_if = "Option::is_none")]
    pub especialidad_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_nested_doctor() {
        let api: ApiDoctorResponse = serde_json::from_value(json!({
            "id": 7,
            "usuario_id": 21,
            "especialidadId": 3,
            "matricula": "MN-1",
            "precioConsulta": 15000,
            "telefono": "555",
            "estado": "activo",
            "disponibilidad": null,
            "Usuario": { "id": 21, "nombre": "Carla", "apellido": "Ruiz", "email": "c@r.test", "tipo": "doctor" },
            "Especialidad": { "id": 3, "nombre": "Dermatología" }
        }))
        .unwrap();

        let doctor = Doctor::from(api);
        assert_eq!(doctor.id, "7");
        assert_eq!(doctor.usuario_id, "21");
        assert_eq!(doctor.especialidad.id, "3");
        assert_eq!(doctor.especialidad.nombre, "Dermatología");
        assert_eq!(doctor.precio_consulta, 15000.0);
        assert_eq!(doctor.nombre_completo(), "Dr. Carla Ruiz");
    }

    #[test]
    fn missing_especialidad_falls_back_to_foreign_key() {
        let api: ApiDoctorResponse = serde_json::from_value(json!({
            "id": "d-1",
            "especialidadId": "esp-9",
            "Usuario": { "id": "u-1", "nombre": "Juan", "apellido": "Sosa" },
            "Especialidad": null
        }))
        .unwrap();

        let doctor = Doctor::from(api);
        assert_eq!(doctor.usuario_id, "u-1");
        assert_eq!(doctor.especialidad.id, "esp-9");
        assert_eq!(doctor.especialidad.nombre, "");
        assert_eq!(doctor.estado, EstadoDoctor::Activo);
    }

    #[test]
    fn account_id_comes_from_nested_usuario() {
        let api: ApiDoctorResponse = serde_json::from_value(json!({
            "id": 4,
            "usuario_id": 99,
            "telefono": null,
            "matricula": null,
            "precioConsulta": null,
            "Usuario": { "id": 21, "nombre": "Carla", "apellido": null, "email": null }
        }))
        .unwrap();

        let doctor = Doctor::from(api);
        assert_eq!(doctor.usuario_id, "21");
        assert_eq!(doctor.apellido, "");
        assert_eq!(doctor.email, "");
        assert_eq!(doctor.telefono, "");
        assert_eq!(doctor.precio_consulta, 0.0);
    }

    #[test]
    fn name_match_is_case_insensitive_over_both_names() {
        let api: ApiDoctorResponse = serde_json::from_value(json!({
            "id": 1,
            "Usuario": { "id": 1, "nombre": "María", "apellido": "Fernández" }
        }))
        .unwrap();
        let doctor = Doctor::from(api);

        assert!(doctor.matches_nombre("marí"));
        assert!(doctor.matches_nombre("FERN"));
        assert!(!doctor.matches_nombre("lopez"));
    }

    #[test]
    fn registro_request_defaults_to_doctor_role() {
        let body = serde_json::to_value(RegistroDoctorRequest::new()).unwrap();
        assert_eq!(body["tipo"], "doctor");
        assert!(body.get("especialidadId").is_some());
    }
}
