use std::path::{Path, PathBuf};

use super::{DataModelFormat, DataModelLoader, Datamodel, FieldKind};
use crate::error::GenerateError;

const SIMPLE_JSON: &str = include_str!("../../../fixtures/simple.json");
const SIMPLE_YAML: &str = include_str!("../../../fixtures/simple.yaml");

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn test_from_json_reads_models_in_order() {
  let datamodel = Datamodel::from_json(SIMPLE_JSON).unwrap();

  let names: Vec<&str> = datamodel.models.iter().map(|model| model.name.as_str()).collect();
  assert_eq!(names, vec!["User", "Post", "Profile"]);

  let user = datamodel.model("User").unwrap();
  assert_eq!(user.documentation.as_deref(), Some("A user of the blogging platform"));
  assert_eq!(
    user.required_field_names().collect::<Vec<_>>(),
    vec!["id", "email", "role", "posts", "createdAt"]
  );

  let posts = user.fields.iter().find(|field| field.name == "posts").unwrap();
  assert_eq!(posts.kind, FieldKind::Object);
  assert_eq!(posts.field_type, "Post");
  assert!(posts.is_list);

  let role = &datamodel.enums[0];
  assert_eq!(role.name, "Role");
  assert_eq!(role.value_names().collect::<Vec<_>>(), vec!["USER", "ADMIN"]);
}

#[test]
fn test_from_json_defaults_missing_flags() {
  let raw = r#"{ "datamodel": { "models": [ { "name": "Tag", "fields": [ { "name": "label", "kind": "scalar", "type": "String" } ] } ] } }"#;
  let datamodel = Datamodel::from_json(raw).unwrap();

  let label = &datamodel.models[0].fields[0];
  assert!(!label.is_list);
  assert!(!label.is_required);
  assert!(label.documentation.is_none());
  assert!(datamodel.enums.is_empty());
}

#[test]
fn test_from_json_accepts_unsupported_kind() {
  let raw = r#"{ "datamodel": { "models": [ { "name": "Place", "fields": [ { "name": "area", "kind": "unsupported", "type": "geometry" } ] } ] } }"#;
  let datamodel = Datamodel::from_json(raw).unwrap();
  assert_eq!(datamodel.models[0].fields[0].kind, FieldKind::Unsupported);
}

#[test]
fn test_from_json_rejects_empty_input() {
  for raw in ["", "   ", "\n\t"] {
    let err = Datamodel::from_json(raw).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyDataModel), "{raw:?}");
    assert_eq!(err.to_string(), "Prisma data model must be a non-empty string.");
  }
  assert!(matches!(Datamodel::from_yaml(" "), Err(GenerateError::EmptyDataModel)));
}

#[test]
fn test_from_json_reports_path_of_invalid_node() {
  let raw = r#"{ "datamodel": { "models": [ { "name": "User", "fields": [ { "name": "id", "kind": "relation", "type": "Int" } ] } ] } }"#;
  let err = Datamodel::from_json(raw).unwrap_err();

  match err {
    GenerateError::InvalidDataModel { path, .. } => assert_eq!(path, "datamodel.models[0].fields[0].kind"),
    other => panic!("expected InvalidDataModel, got {other:?}"),
  }
}

#[test]
fn test_from_json_rejects_trailing_content() {
  let raw = r#"{ "datamodel": {} } {"#;
  assert!(matches!(
    Datamodel::from_json(raw),
    Err(GenerateError::InvalidDataModel { .. })
  ));
}

#[test]
fn test_from_yaml_reads_models_and_enums() {
  let datamodel = Datamodel::from_yaml(SIMPLE_YAML).unwrap();

  let account = datamodel.model("Account").unwrap();
  assert_eq!(account.documentation.as_deref(), Some("A billing account"));
  assert_eq!(account.fields.len(), 3);
  assert_eq!(account.required_field_names().collect::<Vec<_>>(), vec!["id", "balance"]);
  assert_eq!(datamodel.enums[0].value_names().collect::<Vec<_>>(), vec!["EUR", "USD"]);
}

#[test]
fn test_from_yaml_rejects_malformed_document() {
  assert!(matches!(
    Datamodel::from_yaml("datamodel: [1, 2"),
    Err(GenerateError::InvalidDataModelYaml(_))
  ));
}

#[test]
fn test_format_from_path() {
  assert_eq!(DataModelFormat::from_path(Path::new("dmmf.json")), DataModelFormat::Json);
  assert_eq!(DataModelFormat::from_path(Path::new("dmmf.yaml")), DataModelFormat::Yaml);
  assert_eq!(DataModelFormat::from_path(Path::new("dmmf.yml")), DataModelFormat::Yaml);
  assert_eq!(DataModelFormat::from_path(Path::new("dmmf")), DataModelFormat::Json);
}

#[tokio::test]
async fn test_loader_parses_json_fixture() {
  let loader = DataModelLoader::open(&fixture("simple.json")).await.unwrap();
  assert_eq!(loader.format(), DataModelFormat::Json);
  assert_eq!(loader.parse().unwrap(), Datamodel::from_json(SIMPLE_JSON).unwrap());
}

#[tokio::test]
async fn test_loader_parses_yaml_fixture() {
  let loader = DataModelLoader::open(&fixture("simple.yaml")).await.unwrap();
  assert_eq!(loader.format(), DataModelFormat::Yaml);
  assert_eq!(loader.parse().unwrap().models[0].name, "Account");
}

#[tokio::test]
async fn test_loader_fails_for_missing_file() {
  assert!(DataModelLoader::open(&fixture("missing.json")).await.is_err());
}
