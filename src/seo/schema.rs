//! JSON-LD structured data.
//!
//! The base object describes the business for search engines. Pages may
//! replace any of its top-level keys; nested objects such as `address` are
//! replaced whole, never merged field by field.

use crate::page::JsonMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value, json};

/// Structured data for Energy Pool Investments (`GeneralContractor`).
pub fn default_schema() -> JsonMap {
    let value = json!({
        "@context": "https://schema.org",
        "@type": "GeneralContractor",
        "name": "Energy Pool Investments",
        "alternateName": "Energy Pool",
        "url": "https://energypool.co.zw",
        "logo": "https://energypool.co.zw/logo.png",
        "description": "Premier construction and maintenance company in Zimbabwe specializing in waterproofing, epoxy flooring, painting, and civil works.",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "752 Lorraine Drive, Bluffhill",
            "addressLocality": "Harare",
            "addressRegion": "Harare",
            "postalCode": "0000",
            "addressCountry": "ZW"
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": "+263-773-109-447",
            "contactType": "sales",
            "areaServed": "ZW",
            "availableLanguage": "English"
        },
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "08:00",
                "closes": "17:00"
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": "Saturday",
                "opens": "08:00",
                "closes": "13:00"
            }
        ],
        "sameAs": [
            "https://www.facebook.com/energypool",
            "https://www.instagram.com/energypool"
        ]
    });

    let Value::Object(map) = value else {
        return JsonMap::new();
    };
    map
}

/// Shallow-merge `overrides` into a copy of `base`.
///
/// Every top-level key of `overrides` replaces the base value entirely.
/// Replaced keys keep their position, new keys are appended, so the
/// serialized key order is that of `{...base, ...overrides}`.
pub fn merge(base: &JsonMap, overrides: Option<&JsonMap>) -> JsonMap {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Compact JSON text of a structured data object.
///
/// Floats with no fractional part are written as integers (`5.0` -> `5`),
/// the way JavaScript prints numbers.
pub fn to_json(data: &JsonMap) -> String {
    let data: JsonMap = data
        .iter()
        .map(|(key, value)| (key.clone(), normalize_number(value)))
        .collect();
    // Serializing a map of `Value`s with string keys cannot fail.
    serde_json::to_string(&data).unwrap_or_default()
}

/// Largest integer an `f64` holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn normalize_number(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_number).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize_number(value)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

// ============================================================================
// deserialization
// ============================================================================

/// A structured data object as written in TOML or JSON input.
#[derive(Deserialize)]
#[serde(untagged)]
enum Source {
    Toml(toml::Table),
    /// JSON-only values such as `null` or integers past `i64`.
    Json(JsonMap),
}

impl From<Source> for JsonMap {
    fn from(source: Source) -> Self {
        match source {
            Source::Toml(table) => table_to_json(table),
            Source::Json(map) => map,
        }
    }
}

/// Deserialize a structured data object.
///
/// TOML datetimes (`foundingDate = 2010-03-01`) become their string form.
pub fn deserialize_map<'de, D>(deserializer: D) -> Result<JsonMap, D::Error>
where
    D: Deserializer<'de>,
{
    Source::deserialize(deserializer).map(JsonMap::from)
}

/// [`deserialize_map`] for an optional field.
pub fn deserialize_overrides<'de, D>(deserializer: D) -> Result<Option<JsonMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let source: Option<Source> = Option::deserialize(deserializer)?;
    Ok(source.map(JsonMap::from))
}

fn table_to_json(table: toml::Table) -> JsonMap {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect()
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(table_to_json(table)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn default_keys_in_order() {
        let schema = default_schema();
        let keys: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "@context",
                "@type",
                "name",
                "alternateName",
                "url",
                "logo",
                "description",
                "address",
                "contactPoint",
                "openingHoursSpecification",
                "sameAs",
            ]
        );
    }

    #[test]
    fn default_literals() {
        let schema = default_schema();
        assert_eq!(schema["@type"], "GeneralContractor");
        assert_eq!(schema["contactPoint"]["telephone"], "+263-773-109-447");
        assert_eq!(schema["openingHoursSpecification"][0]["closes"], "17:00");
        assert_eq!(schema["openingHoursSpecification"][1]["dayOfWeek"], "Saturday");
        assert_eq!(schema["openingHoursSpecification"][1]["closes"], "13:00");
        assert_eq!(schema["sameAs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn merge_without_overrides_is_identity() {
        let base = default_schema();
        assert_eq!(merge(&base, None), base);
    }

    #[test]
    fn merge_replaces_top_level_key() {
        let base = default_schema();
        let merged = merge(&base, Some(&overrides(json!({"name": "Energy Pool Roofing"}))));

        assert_eq!(merged["name"], "Energy Pool Roofing");
        assert_eq!(merged["address"], base["address"]);
        assert_eq!(merged.len(), base.len());
    }

    #[test]
    fn merge_is_shallow() {
        let base = default_schema();
        let merged = merge(
            &base,
            Some(&overrides(json!({"address": {"addressLocality": "Bulawayo"}}))),
        );

        assert_eq!(merged["address"], json!({"addressLocality": "Bulawayo"}));
        assert!(merged["address"].get("streetAddress").is_none());
    }

    #[test]
    fn merge_keeps_position_and_appends_new_keys() {
        let base = default_schema();
        let merged = merge(
            &base,
            Some(&overrides(json!({"priceRange": "$$", "@type": "RoofingContractor"}))),
        );

        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys[1], "@type");
        assert_eq!(merged["@type"], "RoofingContractor");
        assert_eq!(keys.last(), Some(&"priceRange"));
    }

    #[test]
    fn merge_null_override_replaces() {
        let merged = merge(&default_schema(), Some(&overrides(json!({"logo": null}))));
        assert_eq!(merged["logo"], Value::Null);
    }

    #[test]
    fn to_json_is_compact() {
        let json = to_json(&default_schema());
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"GeneralContractor","#));
        assert!(!json.contains('\n'));
        assert!(json.ends_with(
            r#""sameAs":["https://www.facebook.com/energypool","https://www.instagram.com/energypool"]}"#
        ));
    }

    #[test]
    fn to_json_prints_integral_floats_as_integers() {
        let data = overrides(json!({
            "rating": 5.0,
            "ratio": 2.5,
            "count": 3,
            "offers": [{"price": 120.0}]
        }));
        assert_eq!(
            to_json(&data),
            r#"{"rating":5,"ratio":2.5,"count":3,"offers":[{"price":120}]}"#
        );
    }

    mod deserialize {
        use super::*;

        #[derive(Debug, Deserialize)]
        struct Doc {
            #[serde(deserialize_with = "deserialize_map")]
            schema: JsonMap,
            #[serde(default, deserialize_with = "deserialize_overrides")]
            extra: Option<JsonMap>,
        }

        #[test]
        fn toml_datetime_becomes_string() {
            let doc: Doc = toml::from_str(
                r#"
[schema]
name = "Energy Pool"
foundingDate = 2010-03-01
openedAt = 1979-05-27T07:32:00Z
"#,
            )
            .unwrap();

            assert_eq!(doc.schema["foundingDate"], json!("2010-03-01"));
            assert_eq!(doc.schema["openedAt"], json!("1979-05-27T07:32:00Z"));
            assert!(doc.extra.is_none());
        }

        #[test]
        fn toml_keeps_key_order() {
            let doc: Doc = toml::from_str("[schema]\nzeta = 1\nalpha = [1.5, true]\n").unwrap();
            let keys: Vec<&str> = doc.schema.keys().map(String::as_str).collect();
            assert_eq!(keys, ["zeta", "alpha"]);
            assert_eq!(doc.schema["alpha"], json!([1.5, true]));
        }

        #[test]
        fn json_null_is_kept() {
            let doc: Doc = serde_json::from_value(json!({
                "schema": {"logo": null, "name": "A"},
                "extra": null
            }))
            .unwrap();
            assert_eq!(doc.schema["logo"], Value::Null);
            assert!(doc.extra.is_none());
        }

        #[test]
        fn non_object_is_rejected() {
            assert!(serde_json::from_value::<Doc>(json!({"schema": [1, 2]})).is_err());
        }
    }
}
