//! 标识符归一化
//!
//! 后端在不同表中以数字 (Sequelize) 或字符串 (Mongo `_id` / UUID) 返回主键，
//! 视图层统一使用字符串形式。

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
            // 整数值的浮点数 (如 `7.0`) 按整数输出
            RawId::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
            RawId::Float(f) => f.to_string(),
        }
    }
}

/// `#[serde(deserialize_with = "id::string")]`：数字或字符串 -> `String`
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// 可缺省 / 可为 null 的标识符
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(RawId::into_string)
        .filter(|s| !s.is_empty()))
}

/// 可为 null 的普通字段：`null` 与缺省一样取 `T::default()`
///
/// 单独的 `#[serde(default)]` 只覆盖缺少键的情况。
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::string")]
        id: String,
        #[serde(default, deserialize_with = "super::optional")]
        other: Option<String>,
    }

    #[derive(Deserialize)]
    struct Contacto {
        #[serde(default, deserialize_with = "super::nullable")]
        telefono: String,
        #[serde(default, deserialize_with = "super::nullable")]
        precio: f64,
    }

    #[test]
    fn numeric_and_text_ids_become_strings() {
        let a: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(a.other, None);

        let b: Holder =
            serde_json::from_str(r#"{"id": "65f1c0ffee", "other": 7}"#).unwrap();
        assert_eq!(b.id, "65f1c0ffee");
        assert_eq!(b.other.as_deref(), Some("7"));
    }

    #[test]
    fn null_and_empty_optional_ids_are_none() {
        let a: Holder = serde_json::from_str(r#"{"id": 1, "other": null}"#).unwrap();
        assert_eq!(a.other, None);
        let b: Holder = serde_json::from_str(r#"{"id": 1, "other": ""}"#).unwrap();
        assert_eq!(b.other, None);
    }

    #[test]
    fn integral_float_ids_drop_the_fraction() {
        let a: Holder = serde_json::from_str(r#"{"id": 7.0}"#).unwrap();
        assert_eq!(a.id, "7");
    }

    #[test]
    fn null_plain_fields_fall_back_to_default() {
        let a: Contacto = serde_json::from_str(r#"{"telefono": null, "precio": null}"#).unwrap();
        assert_eq!(a.telefono, "");
        assert_eq!(a.precio, 0.0);

        let b: Contacto = serde_json::from_str(r#"{"telefono": "555"}"#).unwrap();
        assert_eq!(b.telefono, "555");
        assert_eq!(b.precio, 0.0);
    }
}
