use super::OutputEncoding;
use crate::{
  error::{GenerateError, Result},
  generator::schema::SchemaDocument,
};

/// Block-style YAML. Multi-line strings come out as `|-` literals.
pub struct YamlEncoding;

impl OutputEncoding for YamlEncoding {
  fn render(&self, document: &SchemaDocument) -> Result<String> {
    serde_yaml::to_string(document).map_err(GenerateError::SerializeYaml)
  }
}
