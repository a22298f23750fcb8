//! Serializable OpenAPI 3.1 document subset produced by the generator.
//!
//! Only the pieces needed for component schemas are modelled. Maps are
//! [`IndexMap`]s so that schemas appear in registration order and properties
//! in field declaration order in every encoding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::{parse_schema_ref_name, schema_ref_path};

pub const OPENAPI_VERSION: &str = "3.1.0";
pub const DOCUMENT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
  pub openapi: String,
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, serde_json::Value>,
  #[serde(default)]
  pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
  pub title: String,
  #[serde(default)]
  pub description: String,
  pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaFragment>,
}

/// One node of the schema tree: either a `$ref` or an inline schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaFragment {
  Reference(Reference),
  Schema(Box<ObjectSchema>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
  #[serde(rename = "$ref")]
  pub ref_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SchemaType {
  String,
  Integer,
  Number,
  Boolean,
  Object,
  Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum SchemaFormat {
  #[serde(rename = "int32")]
  #[strum(serialize = "int32")]
  Int32,
  #[serde(rename = "int64")]
  #[strum(serialize = "int64")]
  Int64,
  #[serde(rename = "double")]
  #[strum(serialize = "double")]
  Double,
  #[serde(rename = "date-time")]
  #[strum(serialize = "date-time")]
  DateTime,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSchema {
  #[serde(rename = "type")]
  pub schema_type: Option<SchemaType>,
  pub format: Option<SchemaFormat>,
  pub description: Option<String>,
  pub items: Option<Box<SchemaFragment>>,
  pub properties: Option<IndexMap<String, SchemaFragment>>,
  pub required: Option<Vec<String>>,
  #[serde(rename = "enum")]
  pub enum_values: Option<Vec<String>>,
}

impl SchemaDocument {
  /// An empty document carrying the fixed version constants.
  #[must_use]
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      openapi: OPENAPI_VERSION.to_string(),
      info: Info {
        title: title.into(),
        description: description.into(),
        version: DOCUMENT_VERSION.to_string(),
      },
      paths: IndexMap::new(),
      components: Components::default(),
    }
  }

  #[must_use]
  pub fn schemas(&self) -> &IndexMap<String, SchemaFragment> {
    &self.components.schemas
  }

  #[must_use]
  pub fn schema(&self, name: &str) -> Option<&ObjectSchema> {
    self.components.schemas.get(name).and_then(SchemaFragment::as_schema)
  }
}

impl SchemaFragment {
  /// A `$ref` to the component schema registered under `name`.
  #[must_use]
  pub fn reference(name: &str) -> Self {
    Self::Reference(Reference {
      ref_path: schema_ref_path(name),
    })
  }

  #[must_use]
  pub fn array_of(items: Self) -> Self {
    Self::Schema(Box::new(ObjectSchema {
      schema_type: Some(SchemaType::Array),
      items: Some(Box::new(items)),
      ..ObjectSchema::default()
    }))
  }

  #[must_use]
  pub fn typed(schema_type: SchemaType, format: Option<SchemaFormat>) -> Self {
    Self::Schema(Box::new(ObjectSchema {
      schema_type: Some(schema_type),
      format,
      ..ObjectSchema::default()
    }))
  }

  #[must_use]
  pub fn as_schema(&self) -> Option<&ObjectSchema> {
    match self {
      Self::Schema(schema) => Some(schema.as_ref()),
      Self::Reference(_) => None,
    }
  }

  #[must_use]
  pub const fn is_reference(&self) -> bool {
    matches!(self, Self::Reference(_))
  }

  /// Name of the component this fragment points at, if it is a `$ref`.
  #[must_use]
  pub fn ref_name(&self) -> Option<&str> {
    match self {
      Self::Reference(reference) => parse_schema_ref_name(&reference.ref_path),
      Self::Schema(_) => None,
    }
  }

  #[must_use]
  pub fn description(&self) -> Option<&str> {
    self.as_schema().and_then(|schema| schema.description.as_deref())
  }

  /// Replaces the description of an inline schema. References are returned unchanged.
  #[must_use]
  pub fn with_description(self, description: String) -> Self {
    match self {
      Self::Schema(mut schema) => {
        schema.description = Some(description);
        Self::Schema(schema)
      }
      reference @ Self::Reference(_) => reference,
    }
  }
}
