use super::support::simple_datamodel;
use crate::generator::{
  filter::FilterList, options::GenerationOptions, orchestrator::Orchestrator, render::OutputFormat,
  schema::SchemaDocument, warnings::GenerationWarning,
};

fn options_with(include: Option<&str>, exclude: Option<&str>) -> GenerationOptions {
  GenerationOptions {
    include_models: include.map(String::from),
    exclude_models: exclude.map(String::from),
    ..GenerationOptions::default()
  }
}

fn schema_names(document: &SchemaDocument) -> Vec<&str> {
  document.schemas().keys().map(String::as_str).collect()
}

#[test]
fn test_build_without_filters_emits_every_model_and_enum() {
  let orchestrator = Orchestrator::new(simple_datamodel(), GenerationOptions::default());
  let generated = orchestrator.build().unwrap();

  assert_eq!(schema_names(&generated.document), vec!["User", "Post", "Profile", "Role"]);
  assert_eq!(generated.stats.models_total, 3);
  assert_eq!(generated.stats.models_generated, 3);
  assert_eq!(generated.stats.enums_generated, 1);
  assert_eq!(generated.stats.schemas_generated(), generated.document.schemas().len());
  assert!(generated.stats.warnings.is_empty());
}

#[test]
fn test_include_then_exclude_keeps_enums() {
  let orchestrator = Orchestrator::new(simple_datamodel(), options_with(Some("User,Post"), Some("Post")));
  let generated = orchestrator.build().unwrap();

  assert_eq!(schema_names(&generated.document), vec!["User", "Role"]);
  assert_eq!(generated.stats.models_generated, 1);
  assert_eq!(generated.stats.schemas_generated(), 2);
}

#[test]
fn test_unmatched_filter_names_become_warnings() {
  let orchestrator = Orchestrator::new(simple_datamodel(), options_with(Some("User,NonExistentModel"), None));
  let generated = orchestrator.build().unwrap();

  assert_eq!(schema_names(&generated.document), vec!["User", "Role"]);
  assert_eq!(
    generated.stats.warnings,
    vec![GenerationWarning::UnmatchedFilterName {
      list: FilterList::Include,
      name: "NonExistentModel".to_string(),
    }]
  );
  assert!(!generated.stats.warnings[0].is_degraded_field());
}

#[test]
fn test_generate_renders_enabled_encodings_in_order() {
  let options = GenerationOptions {
    generate_json: true,
    generate_js_doc: true,
    ..GenerationOptions::default()
  };
  let output = Orchestrator::new(simple_datamodel(), options).generate().unwrap();

  let names: Vec<&str> = output.files.iter().map(|file| file.file_name()).collect();
  assert_eq!(names, vec!["openapi.yaml", "openapi.json", "openapi.js"]);
  assert!(output.content(OutputFormat::Yaml).unwrap().contains("openapi: 3.1.0"));
  assert!(output.content(OutputFormat::JsDoc).unwrap().contains("@openapi"));
}

#[test]
fn test_generate_with_every_encoding_disabled_renders_nothing() {
  let options = GenerationOptions {
    generate_yaml: false,
    ..GenerationOptions::default()
  };
  let output = Orchestrator::new(simple_datamodel(), options).generate().unwrap();

  assert!(output.files.is_empty());
  assert_eq!(output.stats.models_generated, 3);
}

#[test]
fn test_generation_is_deterministic() {
  let first = Orchestrator::new(simple_datamodel(), GenerationOptions::default())
    .render(OutputFormat::Json)
    .unwrap();
  let second = Orchestrator::new(simple_datamodel(), GenerationOptions::default())
    .render(OutputFormat::Json)
    .unwrap();

  assert_eq!(first, second);
}

#[test]
fn test_independent_runs_in_parallel_match_sequential_output() {
  let expected = Orchestrator::new(simple_datamodel(), GenerationOptions::default())
    .render(OutputFormat::Yaml)
    .unwrap();

  let results: Vec<String> = std::thread::scope(|scope| {
    let handles: Vec<_> = (0..4)
      .map(|_| {
        scope.spawn(|| {
          Orchestrator::new(simple_datamodel(), GenerationOptions::default())
            .render(OutputFormat::Yaml)
            .unwrap()
        })
      })
      .collect();
    handles.into_iter().map(|handle| handle.join().unwrap()).collect()
  });

  assert!(results.iter().all(|result| *result == expected));
}
