//! Orchestration for the data model to OpenAPI schema pipeline.
//!
//! The [`Orchestrator`] owns one parsed data model and one set of resolved
//! options. It filters the models, builds the schema document and renders
//! the enabled encodings. It holds no state between calls, so separate
//! orchestrators can run side by side.
//!
//! ## Usage
//!
//! ```no_run
//! use prisma_oas3_gen::{Datamodel, GenerationOptions, Orchestrator, PartialGenerationOptions};
//!
//! # fn example() -> anyhow::Result<()> {
//! let dmmf = std::fs::read_to_string("dmmf.json")?;
//! let datamodel = Datamodel::from_json(&dmmf)?;
//! let options = GenerationOptions::resolve(PartialGenerationOptions::default());
//!
//! let output = Orchestrator::new(datamodel, options).generate()?;
//! for file in &output.files {
//!   std::fs::write(file.file_name(), &file.content)?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
  dmmf::{Datamodel, Model},
  error::Result,
  generator::{
    builder::SchemaBuilder,
    filter::ModelFilter,
    options::GenerationOptions,
    render::OutputFormat,
    schema::SchemaDocument,
    warnings::GenerationWarning,
  },
};

/// High-level entry point for schema generation.
pub struct Orchestrator {
  datamodel: Datamodel,
  options: GenerationOptions,
  filter: ModelFilter,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Models present in the input data model
  pub models_total: usize,
  /// Models that received a schema after filtering
  pub models_generated: usize,
  /// Enum schemas emitted (enums are never filtered)
  pub enums_generated: usize,
  /// Non-fatal findings: degraded fields and unmatched filter names
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  #[must_use]
  pub fn schemas_generated(&self) -> usize {
    self.models_generated + self.enums_generated
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedDocument {
  pub document: SchemaDocument,
  pub stats: GenerationStats,
}

/// One rendered encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub format: OutputFormat,
  pub content: String,
}

impl GeneratedFile {
  #[must_use]
  pub const fn file_name(&self) -> &'static str {
    self.format.file_name()
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

impl GeneratedOutput {
  #[must_use]
  pub fn content(&self, format: OutputFormat) -> Option<&str> {
    self
      .files
      .iter()
      .find(|file| file.format == format)
      .map(|file| file.content.as_str())
  }
}

impl Orchestrator {
  #[must_use]
  pub fn new(datamodel: Datamodel, options: GenerationOptions) -> Self {
    let filter = ModelFilter::from_options(&options);
    Self {
      datamodel,
      options,
      filter,
    }
  }

  #[must_use]
  pub const fn options(&self) -> &GenerationOptions {
    &self.options
  }

  #[must_use]
  pub const fn datamodel(&self) -> &Datamodel {
    &self.datamodel
  }

  /// Models that pass the include/exclude filter, in input order.
  #[must_use]
  pub fn filtered_models(&self) -> Vec<&Model> {
    self.filter.apply(&self.datamodel.models)
  }

  /// Builds the schema document without rendering it.
  ///
  /// # Errors
  ///
  /// Returns an error if a model and an enum (or two models) share a name.
  pub fn build(&self) -> Result<GeneratedDocument> {
    let models = self.filtered_models();
    let builder = SchemaBuilder::new(&self.datamodel.models, &self.datamodel.enums, &self.options);
    let built = builder.build(&models)?;

    let mut warnings: Vec<GenerationWarning> = self
      .filter
      .unmatched_names(&self.datamodel.models)
      .into_iter()
      .map(|(list, name)| GenerationWarning::UnmatchedFilterName {
        list,
        name: name.to_string(),
      })
      .collect();
    warnings.extend(built.warnings);

    let stats = GenerationStats {
      models_total: self.datamodel.models.len(),
      models_generated: models.len(),
      enums_generated: self.datamodel.enums.len(),
      warnings,
    };

    Ok(GeneratedDocument {
      document: built.document,
      stats,
    })
  }

  /// Builds the document and renders every encoding enabled in the options.
  ///
  /// # Errors
  ///
  /// Returns the errors of [`Orchestrator::build`] and any serialization failure.
  pub fn generate(&self) -> Result<GeneratedOutput> {
    let GeneratedDocument { document, stats } = self.build()?;

    let files = self
      .options
      .encodings()
      .into_iter()
      .map(|format| {
        Ok(GeneratedFile {
          format,
          content: format.render(&document)?,
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(GeneratedOutput { files, stats })
  }

  /// Builds the document and renders a single encoding, regardless of the
  /// encoding switches in the options.
  pub fn render(&self, format: OutputFormat) -> Result<String> {
    let GeneratedDocument { document, .. } = self.build()?;
    format.render(&document)
  }
}
