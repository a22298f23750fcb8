/// Prefix shared by every component schema reference.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Builds the `$ref` pointer for a component schema, e.g. `#/components/schemas/User`.
#[must_use]
pub fn schema_ref_path(name: &str) -> String {
  format!("{SCHEMA_REF_PREFIX}{name}")
}

/// Extracts the component name from a schema `$ref`.
///
/// Returns `None` for pointers outside `#/components/schemas/` and for a bare prefix.
#[must_use]
pub fn parse_schema_ref_name(ref_path: &str) -> Option<&str> {
  ref_path
    .strip_prefix(SCHEMA_REF_PREFIX)
    .filter(|name| !name.is_empty() && !name.contains('/'))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_schema_ref_path() {
    assert_eq!(schema_ref_path("User"), "#/components/schemas/User");
  }

  #[test]
  fn test_parse_schema_ref_name() {
    assert_eq!(parse_schema_ref_name("#/components/schemas/Role"), Some("Role"));
    assert_eq!(parse_schema_ref_name("#/components/schemas/"), None);
    assert_eq!(parse_schema_ref_name("#/components/responses/Error"), None);
    assert_eq!(parse_schema_ref_name("#/components/schemas/Role/items"), None);
    assert_eq!(parse_schema_ref_name("other.yaml#/User"), None);
  }
}
