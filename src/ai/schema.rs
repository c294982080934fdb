//! Output schemas for structured generation.
//!
//! A schema is described once as a small typed tree and rendered into
//! whichever JSON dialect the provider speaks.

use serde_json::{json, Map, Value};

use crate::campaign::MatchType;

/// JSON dialect a provider expects its schema in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDialect {
    /// Gemini `responseSchema` (OpenAPI subset, upper-case type names).
    Gemini,
    /// Standard JSON Schema (lower-case type names).
    JsonSchema,
}

/// Shape of a structured response. Object properties are all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    String { allowed: Option<Vec<&'static str>>, description: Option<&'static str> },
    Array(Box<Schema>),
    Object(Vec<(&'static str, Schema)>),
}

impl Schema {
    /// A plain string.
    pub fn string() -> Self {
        Self::String { allowed: None, description: None }
    }

    /// An array of plain strings.
    pub fn string_array() -> Self {
        Self::Array(Box::new(Self::string()))
    }

    /// Campaign strategy object.
    pub fn strategy() -> Self {
        Self::Object(vec![
            ("goal", Self::string()),
            ("biddingStrategy", Self::string()),
            ("networks", Self::string_array()),
            ("locations", Self::string_array()),
            ("rationale", Self::string()),
        ])
    }

    /// Array of keyword objects.
    pub fn keywords() -> Self {
        Self::Array(Box::new(Self::Object(vec![
            ("text", Self::string()),
            (
                "matchType",
                Self::String { allowed: Some(MatchType::TOKENS.to_vec()), description: None },
            ),
            (
                "intent",
                Self::String {
                    allowed: None,
                    description: Some("Transactional, Informational, or Navigational"),
                },
            ),
        ])))
    }

    /// Ad creative object.
    pub fn ad_creative() -> Self {
        Self::Object(vec![("headlines", Self::string_array()), ("descriptions", Self::string_array())])
    }

    /// Render the schema as JSON in the given dialect.
    pub fn render(&self, dialect: SchemaDialect) -> Value {
        let type_name = |name: &str| match dialect {
            SchemaDialect::Gemini => Value::String(name.to_uppercase()),
            SchemaDialect::JsonSchema => Value::String(name.to_string()),
        };

        match self {
            Self::String { allowed, description } => {
                let mut obj = Map::new();
                obj.insert("type".to_string(), type_name("string"));
                if let Some(values) = allowed {
                    obj.insert("enum".to_string(), json!(values));
                }
                if let Some(desc) = description {
                    obj.insert("description".to_string(), json!(desc));
                }
                Value::Object(obj)
            }
            Self::Array(items) => json!({
                "type": type_name("array"),
                "items": items.render(dialect),
            }),
            Self::Object(properties) => {
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| ((*name).to_string(), schema.render(dialect)))
                    .collect();
                let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
                json!({
                    "type": type_name("object"),
                    "properties": props,
                    "required": required,
                })
            }
        }
    }
}
