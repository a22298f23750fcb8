//! Output encodings for a [`SchemaDocument`].
//!
//! Each encoding renders from a shared, immutable document, so any subset can
//! be produced in any order.

mod jsdoc;
mod json;
mod yaml;

pub use jsdoc::JsDocEncoding;
pub use json::JsonEncoding;
pub use yaml::YamlEncoding;

use crate::{error::Result, generator::schema::SchemaDocument};

pub trait OutputEncoding {
  fn render(&self, document: &SchemaDocument) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum OutputFormat {
  #[strum(serialize = "YAML")]
  Yaml,
  #[strum(serialize = "JSON")]
  Json,
  #[strum(serialize = "JSDoc")]
  JsDoc,
}

impl OutputFormat {
  /// Fixed file name used when the output is written to disk.
  #[must_use]
  pub const fn file_name(self) -> &'static str {
    match self {
      Self::Yaml => "openapi.yaml",
      Self::Json => "openapi.json",
      Self::JsDoc => "openapi.js",
    }
  }

  #[must_use]
  pub fn encoding(self) -> &'static dyn OutputEncoding {
    match self {
      Self::Yaml => &YamlEncoding,
      Self::Json => &JsonEncoding,
      Self::JsDoc => &JsDocEncoding,
    }
  }

  pub fn render(self, document: &SchemaDocument) -> Result<String> {
    self.encoding().render(document)
  }
}
