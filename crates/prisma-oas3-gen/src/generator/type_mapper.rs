//! Maps Prisma field descriptors onto schema fragments.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::{
  dmmf::{Field, FieldKind, Model},
  generator::{
    schema::{SchemaFormat, SchemaFragment, SchemaType},
    warnings::Degradation,
  },
  utils::normalize_description,
};

/// Prisma scalar types with a dedicated schema mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum ScalarType {
  String,
  Int,
  BigInt,
  Float,
  Decimal,
  Boolean,
  DateTime,
  Json,
  #[strum(serialize = "Unsupported", serialize = "unsupported")]
  Unsupported,
}

impl ScalarType {
  #[must_use]
  pub const fn schema_type(self) -> (SchemaType, Option<SchemaFormat>) {
    match self {
      Self::String | Self::Unsupported => (SchemaType::String, None),
      Self::Int => (SchemaType::Integer, Some(SchemaFormat::Int32)),
      Self::BigInt => (SchemaType::Integer, Some(SchemaFormat::Int64)),
      Self::Float | Self::Decimal => (SchemaType::Number, Some(SchemaFormat::Double)),
      Self::Boolean => (SchemaType::Boolean, None),
      Self::DateTime => (SchemaType::String, Some(SchemaFormat::DateTime)),
      Self::Json => (SchemaType::Object, None),
    }
  }
}

/// Name to descriptor lookup over the full, unfiltered model collection.
///
/// Relations are resolved by name against this index, so a relation to a
/// model removed by the filter still produces a `$ref`.
#[derive(Debug, Clone, Default)]
pub struct ModelIndex<'a> {
  models: IndexMap<&'a str, &'a Model>,
}

impl<'a> ModelIndex<'a> {
  #[must_use]
  pub fn new(models: &'a [Model]) -> Self {
    Self {
      models: models.iter().map(|model| (model.name.as_str(), model)).collect(),
    }
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&'a Model> {
    self.models.get(name).copied()
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.models.contains_key(name)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.models.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.models.is_empty()
  }
}

/// Result of mapping one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
  pub schema: SchemaFragment,
  pub degraded: Option<Degradation>,
}

impl MappedField {
  const fn exact(schema: SchemaFragment) -> Self {
    Self { schema, degraded: None }
  }

  fn degraded(schema_type: SchemaType, reason: Degradation) -> Self {
    let schema = SchemaFragment::typed(schema_type, None).with_description(reason.placeholder().to_string());
    Self {
      schema,
      degraded: Some(reason),
    }
  }
}

pub struct TypeMapper<'a> {
  models: &'a ModelIndex<'a>,
}

impl<'a> TypeMapper<'a> {
  #[must_use]
  pub const fn new(models: &'a ModelIndex<'a>) -> Self {
    Self { models }
  }

  /// Maps `field` to the fragment used as its property schema.
  ///
  /// Never fails: unknown scalars, unsupported kinds and dangling relations
  /// fall back to placeholder fragments and report the reason in
  /// [`MappedField::degraded`]. Field documentation becomes the description
  /// of every fragment except a bare `$ref`.
  #[must_use]
  pub fn map_field(&self, field: &Field) -> MappedField {
    let mapped = match field.kind {
      FieldKind::Scalar => Self::map_scalar(field),
      FieldKind::Enum => Self::map_enum(field),
      FieldKind::Object => self.map_relation(field),
      FieldKind::Unsupported => MappedField::degraded(SchemaType::String, Degradation::UnsupportedFieldKind),
    };

    match field.documentation.as_deref() {
      Some(documentation) if !mapped.schema.is_reference() => MappedField {
        schema: mapped.schema.with_description(normalize_description(documentation)),
        ..mapped
      },
      _ => mapped,
    }
  }

  fn map_scalar(field: &Field) -> MappedField {
    let mapped = match ScalarType::from_str(&field.field_type) {
      Ok(ScalarType::Unsupported) => MappedField::degraded(SchemaType::String, Degradation::UnsupportedScalar),
      Ok(scalar) => {
        let (schema_type, format) = scalar.schema_type();
        MappedField::exact(SchemaFragment::typed(schema_type, format))
      }
      Err(_) => MappedField::degraded(
        SchemaType::String,
        Degradation::UnknownScalar {
          type_name: field.field_type.clone(),
        },
      ),
    };

    Self::wrap_list(field, mapped)
  }

  /// Enum fields are a single `$ref` whether or not they are lists.
  fn map_enum(field: &Field) -> MappedField {
    MappedField::exact(SchemaFragment::reference(&field.field_type))
  }

  fn map_relation(&self, field: &Field) -> MappedField {
    if !self.models.contains(&field.field_type) {
      return MappedField::degraded(
        SchemaType::Object,
        Degradation::UnknownRelation {
          model: field.field_type.clone(),
        },
      );
    }

    Self::wrap_list(field, MappedField::exact(SchemaFragment::reference(&field.field_type)))
  }

  fn wrap_list(field: &Field, mapped: MappedField) -> MappedField {
    if field.is_list {
      MappedField {
        schema: SchemaFragment::array_of(mapped.schema),
        ..mapped
      }
    } else {
      mapped
    }
  }
}
