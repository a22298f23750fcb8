//! Generator configuration.
//!
//! [`GenerationOptions`] is always fully populated. Callers supply a
//! [`PartialGenerationOptions`], typically deserialized from the generator
//! block of the Prisma schema, and [`GenerationOptions::resolve`] fills every
//! missing key with its default.

use better_default::Default;
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
  error::{GenerateError, Result},
  generator::render::OutputFormat,
};

pub const DEFAULT_OUTPUT: &str = "./openapi";
pub const DEFAULT_TITLE: &str = "Prisma API";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerationOptions {
  /// Output directory hint for the file writer.
  #[default(DEFAULT_OUTPUT.to_string())]
  pub output: String,
  #[default(DEFAULT_TITLE.to_string())]
  pub title: String,
  pub description: String,
  /// Comma-separated allow-list of model names.
  pub include_models: Option<String>,
  /// Comma-separated deny-list of model names, applied after `include_models`.
  pub exclude_models: Option<String>,
  #[default(true)]
  pub generate_yaml: bool,
  pub generate_json: bool,
  pub generate_js_doc: bool,
}

/// Caller-supplied overrides. Unset keys keep their default.
///
/// Boolean keys accept either JSON booleans or the strings `"true"` and
/// `"false"`, since generator config values arrive from the host as strings.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialGenerationOptions {
  pub output: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub include_models: Option<String>,
  pub exclude_models: Option<String>,
  #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
  pub generate_yaml: Option<bool>,
  #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
  pub generate_json: Option<bool>,
  #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
  pub generate_js_doc: Option<bool>,
}

impl PartialGenerationOptions {
  /// Parses a generator config object.
  pub fn from_json(raw: &str) -> Result<Self> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| GenerateError::InvalidConfig {
      path: err.path().to_string(),
      source: err.into_inner(),
    })
  }

  /// Layers `overrides` on top of `self`; keys set in `overrides` win.
  #[must_use]
  pub fn merge(self, overrides: Self) -> Self {
    Self {
      output: overrides.output.or(self.output),
      title: overrides.title.or(self.title),
      description: overrides.description.or(self.description),
      include_models: overrides.include_models.or(self.include_models),
      exclude_models: overrides.exclude_models.or(self.exclude_models),
      generate_yaml: overrides.generate_yaml.or(self.generate_yaml),
      generate_json: overrides.generate_json.or(self.generate_json),
      generate_js_doc: overrides.generate_js_doc.or(self.generate_js_doc),
    }
  }
}

impl GenerationOptions {
  /// Fills every key missing from `partial` with its default.
  #[must_use]
  pub fn resolve(partial: PartialGenerationOptions) -> Self {
    let defaults = Self::default();
    Self {
      output: partial.output.unwrap_or(defaults.output),
      title: partial.title.unwrap_or(defaults.title),
      description: partial.description.unwrap_or(defaults.description),
      include_models: partial.include_models.or(defaults.include_models),
      exclude_models: partial.exclude_models.or(defaults.exclude_models),
      generate_yaml: partial.generate_yaml.unwrap_or(defaults.generate_yaml),
      generate_json: partial.generate_json.unwrap_or(defaults.generate_json),
      generate_js_doc: partial.generate_js_doc.unwrap_or(defaults.generate_js_doc),
    }
  }

  /// Enabled output encodings, always in YAML, JSON, JSDoc order.
  #[must_use]
  pub fn encodings(&self) -> Vec<OutputFormat> {
    [
      (self.generate_yaml, OutputFormat::Yaml),
      (self.generate_json, OutputFormat::Json),
      (self.generate_js_doc, OutputFormat::JsDoc),
    ]
    .into_iter()
    .filter_map(|(enabled, format)| enabled.then_some(format))
    .collect()
  }

  /// The single encoding returned by the library entry point.
  ///
  /// JSON only wins when it is requested and YAML is switched off.
  #[must_use]
  pub const fn library_format(&self) -> OutputFormat {
    if self.generate_json && !self.generate_yaml {
      OutputFormat::Json
    } else if self.generate_yaml {
      OutputFormat::Yaml
    } else {
      OutputFormat::Json
    }
  }
}

impl From<PartialGenerationOptions> for GenerationOptions {
  fn from(partial: PartialGenerationOptions) -> Self {
    Self::resolve(partial)
  }
}
