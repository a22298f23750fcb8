use super::OutputEncoding;
use crate::{
  error::{GenerateError, Result},
  generator::schema::SchemaDocument,
};

/// Pretty-printed JSON with two-space indentation.
pub struct JsonEncoding;

impl OutputEncoding for JsonEncoding {
  fn render(&self, document: &SchemaDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(GenerateError::SerializeJson)
  }
}
