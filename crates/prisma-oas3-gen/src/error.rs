use thiserror::Error;

/// Errors surfaced by the schema generation pipeline.
///
/// Only malformed input reaches the caller. Anomalies inside a well-formed
/// data model (unknown scalar types, dangling relations) are absorbed into
/// degraded output and reported through [`GenerationWarning`](crate::GenerationWarning).
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("Prisma data model must be a non-empty string.")]
  EmptyDataModel,

  #[error("invalid data model at `{path}`: {source}")]
  InvalidDataModel {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid data model: {0}")]
  InvalidDataModelYaml(#[source] serde_yaml::Error),

  #[error("invalid generator config at `{path}`: {source}")]
  InvalidConfig {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("schema name `{name}` is declared more than once")]
  DuplicateSchemaName { name: String },

  #[error("failed to serialize document as JSON: {0}")]
  SerializeJson(#[source] serde_json::Error),

  #[error("failed to serialize document as YAML: {0}")]
  SerializeYaml(#[source] serde_yaml::Error),
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
