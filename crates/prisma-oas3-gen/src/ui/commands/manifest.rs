use serde::Serialize;

use prisma_oas3_gen::generator::options::DEFAULT_OUTPUT;

/// Identification handed to the Prisma generator host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorManifest {
  pub name: &'static str,
  pub pretty_name: &'static str,
  pub default_output: &'static str,
  pub version: &'static str,
}

impl Default for GeneratorManifest {
  fn default() -> Self {
    Self {
      name: "prisma-openapi",
      pretty_name: "Prisma OpenAPI",
      default_output: DEFAULT_OUTPUT,
      version: env!("CARGO_PKG_VERSION"),
    }
  }
}

pub fn print_manifest() -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(&GeneratorManifest::default())?);
  Ok(())
}
