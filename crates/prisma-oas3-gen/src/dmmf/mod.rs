//! Data model descriptors produced by the Prisma schema parser.
//!
//! The parser itself lives outside this crate. It hands over its result as a
//! DMMF (data model meta format) document, which is deserialized here into
//! immutable descriptor values. Only the attributes that influence the
//! generated schemas are modelled; every other key is ignored.

mod loader;

#[cfg(test)]
mod tests;

use serde::Deserialize;

pub use loader::{DataModelFormat, DataModelLoader};

use crate::error::{GenerateError, Result};

/// Top-level DMMF document as emitted by the schema parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
  pub datamodel: Datamodel,
}

/// The parsed collection of models and enums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, bon::Builder)]
pub struct Datamodel {
  #[serde(default)]
  #[builder(default)]
  pub models: Vec<Model>,
  #[serde(default)]
  #[builder(default)]
  pub enums: Vec<DatamodelEnum>,
}

/// A named record type with an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
pub struct Model {
  #[builder(into)]
  pub name: String,
  #[serde(default)]
  #[builder(into)]
  pub documentation: Option<String>,
  #[serde(default)]
  #[builder(default)]
  pub fields: Vec<Field>,
}

/// Classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
  /// A primitive column type (`String`, `Int`, ...).
  Scalar,
  /// A reference to a declared enum.
  Enum,
  /// A relation to another model.
  Object,
  /// A native database type without a portable scalar.
  Unsupported,
}

/// One field of a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct Field {
  #[builder(into)]
  pub name: String,
  pub kind: FieldKind,
  /// Scalar type name, enum name or related model name depending on `kind`.
  #[serde(rename = "type")]
  #[builder(into)]
  pub field_type: String,
  #[serde(default)]
  #[builder(default)]
  pub is_list: bool,
  #[serde(default)]
  #[builder(default)]
  pub is_required: bool,
  #[serde(default)]
  #[builder(into)]
  pub documentation: Option<String>,
}

/// A named closed set of string values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
pub struct DatamodelEnum {
  #[builder(into)]
  pub name: String,
  #[serde(default)]
  #[builder(default)]
  pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumValue {
  pub name: String,
}

impl EnumValue {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

impl Datamodel {
  /// Parses a DMMF JSON document.
  ///
  /// Empty or whitespace-only input is rejected before parsing. Parse errors
  /// carry the path of the offending node, e.g. `datamodel.models[0].fields[2].kind`.
  pub fn from_json(raw: &str) -> Result<Self> {
    ensure_non_empty(raw)?;

    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let document: Document =
      serde_path_to_error::deserialize(&mut deserializer).map_err(|err| GenerateError::InvalidDataModel {
        path: err.path().to_string(),
        source: err.into_inner(),
      })?;
    deserializer.end().map_err(|source| GenerateError::InvalidDataModel {
      path: ".".to_string(),
      source,
    })?;

    Ok(document.datamodel)
  }

  /// Parses a DMMF YAML document.
  pub fn from_yaml(raw: &str) -> Result<Self> {
    ensure_non_empty(raw)?;
    let document: Document = serde_yaml::from_str(raw).map_err(GenerateError::InvalidDataModelYaml)?;
    Ok(document.datamodel)
  }

  #[must_use]
  pub fn model(&self, name: &str) -> Option<&Model> {
    self.models.iter().find(|model| model.name == name)
  }
}

impl Model {
  /// Names of the required fields, in declaration order.
  pub fn required_field_names(&self) -> impl Iterator<Item = &str> {
    self
      .fields
      .iter()
      .filter(|field| field.is_required)
      .map(|field| field.name.as_str())
  }
}

impl DatamodelEnum {
  pub fn value_names(&self) -> impl Iterator<Item = &str> {
    self.values.iter().map(|value| value.name.as_str())
  }
}

fn ensure_non_empty(raw: &str) -> Result<()> {
  if raw.trim().is_empty() {
    return Err(GenerateError::EmptyDataModel);
  }
  Ok(())
}
