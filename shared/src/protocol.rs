use crate::doctor::{ActualizarDoctorRequest, ApiDoctorResponse, RegistroDoctorRequest};
use crate::paciente::{ActualizarPacienteRequest, ApiPacienteResponse, RegistroPacienteRequest};
use crate::{ApiUserProfile, Especialidad, LoginRequest, LoginResponse, ResetPasswordRequest};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the endpoint expects a bearer token.
    const AUTHENTICATED: bool = false;

    /// The URL path relative to the API base, including any query string.
    fn path(&self) -> String;

    /// The JSON body, if the endpoint takes one.
    fn body(&self) -> serde_json::Result<Option<Value>> {
        Ok(None)
    }
}

fn json_body<T: Serialize>(value: &T) -> serde_json::Result<Option<Value>> {
    serde_json::to_value(value).map(Some)
}

fn query_value(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(self)
    }
}

/// Current user's nested profile
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfilRequest;

impl ApiRequest for PerfilRequest {
    type Response = ApiUserProfile;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        "/auth/perfil".to_string()
    }
}

impl ApiRequest for ResetPasswordRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/reset-password".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(self)
    }
}

// =========================================================
// Doctores
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ListDoctoresRequest;

impl ApiRequest for ListDoctoresRequest {
    type Response = Vec<ApiDoctorResponse>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/doctores".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct DoctoresPorNombreRequest {
    pub nombre: String,
}

impl ApiRequest for DoctoresPorNombreRequest {
    type Response = Vec<ApiDoctorResponse>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/doctores/name?nombre={}", query_value(&self.nombre))
    }
}

#[derive(Debug, Clone)]
pub struct DoctoresPorEspecialidadRequest {
    pub especialidad_id: String,
}

impl ApiRequest for DoctoresPorEspecialidadRequest {
    type Response = Vec<ApiDoctorResponse>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/doctores/especialidad/{}", self.especialidad_id)
    }
}

#[derive(Debug, Clone)]
pub struct GetDoctorRequest {
    pub id: String,
}

impl ApiRequest for GetDoctorRequest {
    type Response = ApiDoctorResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/doctores/{}", self.id)
    }
}

impl ApiRequest for RegistroDoctorRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        "/doctores".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDoctorRequest {
    pub id: String,
    pub cambios: ActualizarDoctorRequest,
}

impl ApiRequest for UpdateDoctorRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("/doctores/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(&self.cambios)
    }
}

/// Mark a doctor as inactive
#[derive(Debug, Clone)]
pub struct DesactivarDoctorRequest {
    pub id: String,
}

impl ApiRequest for DesactivarDoctorRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("/doctores/{}/estado", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        Ok(Some(json!({ "estado": "inactivo" })))
    }
}

// =========================================================
// Pacientes
// =========================================================

impl ApiRequest for RegistroPacienteRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/pacientes/registro".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone)]
pub struct GetPacienteRequest {
    pub id: String,
}

impl ApiRequest for GetPacienteRequest {
    type Response = ApiPacienteResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/pacientes/{}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct GetPacienteByDniRequest {
    pub dni: String,
}

impl ApiRequest for GetPacienteByDniRequest {
    type Response = ApiPacienteResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/pacientes/dni/{}", self.dni)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListPacientesRequest;

impl ApiRequest for ListPacientesRequest {
    type Response = Vec<ApiPacienteResponse>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        "/pacientes".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePacienteRequest {
    pub id: String,
    pub datos: ActualizarPacienteRequest,
}

impl ApiRequest for UpdatePacienteRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/pacientes/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        json_body(&self.datos)
    }
}

/// Unlink the patient's external identity-provider account
#[derive(Debug, Clone)]
pub struct DesvincularPacienteRequest {
    pub id: String,
}

impl ApiRequest for DesvincularPacienteRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/pacientes/desvincular/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<Value>> {
        Ok(Some(json!({})))
    }
}

// =========================================================
// Especialidades
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ListEspecialidadesRequest;

impl ApiRequest for ListEspecialidadesRequest {
    type Response = Vec<Especialidad>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/especialidades".to_string()
    }
}
