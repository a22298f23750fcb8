//! Generates OpenAPI 3.1 component schemas from a Prisma data model.
//!
//! The input is the DMMF document produced by the Prisma schema parser. Each
//! model becomes an object schema, each enum a string schema, and the result
//! is rendered as YAML, JSON and/or `@openapi` JSDoc comment blocks.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod dmmf;
pub mod error;
pub mod generator;
mod utils;

pub use dmmf::{Datamodel, DatamodelEnum, EnumValue, Field, FieldKind, Model};
pub use error::{GenerateError, Result};
pub use generator::{
  filter::{FilterList, ModelFilter},
  options::{GenerationOptions, PartialGenerationOptions},
  orchestrator::{GeneratedDocument, GeneratedFile, GeneratedOutput, GenerationStats, Orchestrator},
  render::OutputFormat,
  schema::{SchemaDocument, SchemaFragment},
  warnings::{Degradation, GenerationWarning},
};

/// Generates a single schema document from a DMMF JSON string.
///
/// Returns YAML unless JSON is requested with YAML switched off; if both are
/// switched off JSON is returned anyway.
///
/// # Errors
///
/// Fails on empty or malformed input and on schema name collisions.
pub fn generate_openapi_schema(dmmf: &str, options: PartialGenerationOptions) -> Result<String> {
  let datamodel = Datamodel::from_json(dmmf)?;
  let options = GenerationOptions::resolve(options);
  let format = options.library_format();
  Orchestrator::new(datamodel, options).render(format)
}

/// Generates every encoding enabled in `options` from a DMMF JSON string.
pub fn generate_openapi_outputs(dmmf: &str, options: PartialGenerationOptions) -> Result<GeneratedOutput> {
  let datamodel = Datamodel::from_json(dmmf)?;
  Orchestrator::new(datamodel, GenerationOptions::resolve(options)).generate()
}
