use std::fmt;

use crate::generator::filter::FilterList;

/// Why a field fell back to a placeholder schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
  /// The scalar type name is not one of the known Prisma scalars.
  UnknownScalar { type_name: String },
  /// The scalar is Prisma's `Unsupported` native type.
  UnsupportedScalar,
  /// The field kind itself has no schema mapping.
  UnsupportedFieldKind,
  /// The relation points at a model missing from the data model.
  UnknownRelation { model: String },
}

impl Degradation {
  /// Description attached to the fallback fragment.
  #[must_use]
  pub const fn placeholder(&self) -> &'static str {
    match self {
      Self::UnknownScalar { .. } => "Unknown type",
      Self::UnsupportedScalar => "Unsupported type",
      Self::UnsupportedFieldKind => "Unsupported field kind",
      Self::UnknownRelation { .. } => "Unknown related model",
    }
  }
}

impl fmt::Display for Degradation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownScalar { type_name } => write!(f, "unknown scalar type `{type_name}`"),
      Self::UnsupportedScalar => f.write_str("unsupported scalar type"),
      Self::UnsupportedFieldKind => f.write_str("unsupported field kind"),
      Self::UnknownRelation { model } => write!(f, "related model `{model}` is not declared"),
    }
  }
}

/// Non-fatal findings collected while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
  DegradedField {
    model: String,
    field: String,
    reason: Degradation,
  },
  UnmatchedFilterName {
    list: FilterList,
    name: String,
  },
}

impl GenerationWarning {
  #[must_use]
  pub const fn is_degraded_field(&self) -> bool {
    matches!(self, Self::DegradedField { .. })
  }
}

impl fmt::Display for GenerationWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DegradedField { model, field, reason } => {
        write!(f, "{model}.{field}: {reason}, emitted as `{}`", reason.placeholder())
      }
      Self::UnmatchedFilterName { list, name } => write!(f, "{list} entry `{name}` matches no model"),
    }
  }
}
