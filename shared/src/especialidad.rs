use serde::{Deserialize, Serialize};

use crate::id;

/// 医学专科
///
/// 同时接受 `_id` (Mongo) 与 `id` (Sequelize) 两种主键字段名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Especialidad {
    #[serde(alias = "_id", deserialize_with = "id::string")]
    pub id: String,
    #[serde(default, deserialize_with = "id::nullable")]
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl Especialidad {
    pub fn new(id: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            descripcion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_id_field_names() {
        let mongo: Especialidad =
            serde_json::from_str(r#"{"_id": "abc123", "nombre": "Cardiología"}"#).unwrap();
        let sql: Especialidad =
            serde_json::from_str(r#"{"id": 4, "nombre": "Pediatría", "descripcion": "Niños"}"#)
                .unwrap();

        assert_eq!(mongo.id, "abc123");
        assert_eq!(mongo.descripcion, None);
        assert_eq!(sql.id, "4");
        assert_eq!(sql.descripcion.as_deref(), Some("Niños"));
    }
}
