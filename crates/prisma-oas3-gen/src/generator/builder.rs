use indexmap::{IndexMap, map::Entry};

use crate::{
  dmmf::{DatamodelEnum, Model},
  error::{GenerateError, Result},
  generator::{
    options::GenerationOptions,
    schema::{ObjectSchema, SchemaDocument, SchemaFragment, SchemaType},
    type_mapper::{ModelIndex, TypeMapper},
    warnings::GenerationWarning,
  },
  utils::normalize_description,
};

/// A built document together with the warnings raised while mapping fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltDocument {
  pub document: SchemaDocument,
  pub warnings: Vec<GenerationWarning>,
}

/// Assembles the component schemas for a set of models and enums.
pub struct SchemaBuilder<'a> {
  index: ModelIndex<'a>,
  enums: &'a [DatamodelEnum],
  options: &'a GenerationOptions,
}

impl<'a> SchemaBuilder<'a> {
  /// `all_models` is the unfiltered collection used to resolve relations.
  #[must_use]
  pub fn new(all_models: &'a [Model], enums: &'a [DatamodelEnum], options: &'a GenerationOptions) -> Self {
    Self {
      index: ModelIndex::new(all_models),
      enums,
      options,
    }
  }

  /// Registers one object schema per model in `models`, then one string
  /// schema per enum.
  ///
  /// Fails only if two schemas would share a name.
  pub fn build(&self, models: &[&Model]) -> Result<BuiltDocument> {
    let mut document = SchemaDocument::new(&self.options.title, &self.options.description);
    let mut warnings = Vec::new();
    let schemas = &mut document.components.schemas;

    for model in models {
      let schema = self.build_model(model, &mut warnings);
      register(schemas, &model.name, schema)?;
    }

    for enum_def in self.enums {
      register(schemas, &enum_def.name, Self::build_enum(enum_def))?;
    }

    Ok(BuiltDocument { document, warnings })
  }

  fn build_model(&self, model: &Model, warnings: &mut Vec<GenerationWarning>) -> SchemaFragment {
    let mapper = TypeMapper::new(&self.index);
    let mut properties = IndexMap::with_capacity(model.fields.len());

    for field in &model.fields {
      let mapped = mapper.map_field(field);
      if let Some(reason) = mapped.degraded {
        warnings.push(GenerationWarning::DegradedField {
          model: model.name.clone(),
          field: field.name.clone(),
          reason,
        });
      }
      properties.insert(field.name.clone(), mapped.schema);
    }

    SchemaFragment::Schema(Box::new(ObjectSchema {
      schema_type: Some(SchemaType::Object),
      description: model.documentation.as_deref().map(normalize_description),
      properties: Some(properties),
      required: Some(model.required_field_names().map(String::from).collect()),
      ..ObjectSchema::default()
    }))
  }

  fn build_enum(enum_def: &DatamodelEnum) -> SchemaFragment {
    SchemaFragment::Schema(Box::new(ObjectSchema {
      schema_type: Some(SchemaType::String),
      enum_values: Some(enum_def.value_names().map(String::from).collect()),
      ..ObjectSchema::default()
    }))
  }
}

fn register(schemas: &mut IndexMap<String, SchemaFragment>, name: &str, schema: SchemaFragment) -> Result<()> {
  match schemas.entry(name.to_string()) {
    Entry::Occupied(_) => Err(GenerateError::DuplicateSchemaName { name: name.to_string() }),
    Entry::Vacant(slot) => {
      slot.insert(schema);
      Ok(())
    }
  }
}
