use std::fmt::Write as _;

use super::OutputEncoding;
use crate::{
  error::Result,
  generator::schema::{ObjectSchema, SchemaDocument, SchemaFragment},
  utils::yaml_scalar,
};

const HEADER: &str = "/**\n * @openapi\n * components:\n *   schemas:\n */\n\n";

/// `@openapi` comment blocks for documentation tooling such as swagger-jsdoc.
///
/// The output opens with a block declaring `components.schemas`, followed by
/// one block per schema in document order. Block bodies are YAML indented two
/// spaces per level.
pub struct JsDocEncoding;

impl OutputEncoding for JsDocEncoding {
  fn render(&self, document: &SchemaDocument) -> Result<String> {
    let mut out = String::from(HEADER);

    for (name, schema) in document.schemas() {
      let mut block = CommentBlock::open();
      block.line(0, "components:");
      block.line(1, "schemas:");
      block.line(2, &format!("{name}:"));
      block.fragment(3, schema);
      out.push_str(&block.close());
    }

    Ok(out)
  }
}

struct CommentBlock {
  body: String,
}

impl CommentBlock {
  fn open() -> Self {
    Self {
      body: String::from("/**\n * @openapi\n"),
    }
  }

  fn close(mut self) -> String {
    self.body.push_str(" */\n\n");
    self.body
  }

  fn line(&mut self, level: usize, text: &str) {
    let text = text.replace("*/", "*\\/");
    if text.is_empty() {
      self.body.push_str(" *\n");
    } else {
      let _ = writeln!(self.body, " * {}{text}", "  ".repeat(level));
    }
  }

  fn fragment(&mut self, level: usize, fragment: &SchemaFragment) {
    match fragment {
      SchemaFragment::Reference(reference) => {
        self.line(level, &format!("$ref: {}", yaml_scalar(&reference.ref_path)));
      }
      SchemaFragment::Schema(schema) => self.schema(level, schema),
    }
  }

  fn schema(&mut self, level: usize, schema: &ObjectSchema) {
    if let Some(schema_type) = schema.schema_type {
      self.line(level, &format!("type: {schema_type}"));
    }
    if let Some(format) = schema.format {
      self.line(level, &format!("format: {format}"));
    }
    if let Some(description) = &schema.description {
      self.text(level, "description", description);
    }
    if let Some(items) = &schema.items {
      self.line(level, "items:");
      self.fragment(level + 1, items);
    }
    if let Some(properties) = &schema.properties {
      if properties.is_empty() {
        self.line(level, "properties: {}");
      } else {
        self.line(level, "properties:");
        for (name, property) in properties {
          self.line(level + 1, &format!("{name}:"));
          self.fragment(level + 2, property);
        }
      }
    }
    if let Some(required) = &schema.required {
      self.list(level, "required", required);
    }
    if let Some(values) = &schema.enum_values {
      self.list(level, "enum", values);
    }
  }

  fn text(&mut self, level: usize, key: &str, value: &str) {
    if !value.contains('\n') {
      self.line(level, &format!("{key}: {}", yaml_scalar(value)));
    } else if value.ends_with('\n') || value.lines().any(|line| line.starts_with(char::is_whitespace)) {
      // `|-` strips trailing breaks, and a literal block cannot start a line
      // with indentation it did not declare.
      let quoted = serde_json::Value::String(value.to_string()).to_string();
      self.line(level, &format!("{key}: {quoted}"));
    } else {
      self.line(level, &format!("{key}: |-"));
      for line in value.lines() {
        self.line(level + 1, line);
      }
    }
  }

  fn list(&mut self, level: usize, key: &str, items: &[String]) {
    if items.is_empty() {
      self.line(level, &format!("{key}: []"));
      return;
    }

    self.line(level, &format!("{key}:"));
    for item in items {
      self.line(level + 1, &format!("- {}", yaml_scalar(item)));
    }
  }
}
