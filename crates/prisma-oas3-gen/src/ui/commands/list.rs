use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;

use crate::ui::{Colors, ModelFilterArgs, colors::IntoComfyColor, term_width};
use prisma_oas3_gen::{Model, ModelFilter, dmmf::DataModelLoader};

/// One row of the model listing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModelSummary {
  name: String,
  fields: usize,
  required: usize,
  included: bool,
}

impl ModelSummary {
  fn new(model: &Model, filter: &ModelFilter) -> Self {
    Self {
      name: model.name.clone(),
      fields: model.fields.len(),
      required: model.required_field_names().count(),
      included: filter.allows(&model.name),
    }
  }

  const fn status(&self) -> &'static str {
    if self.included { "included" } else { "filtered" }
  }
}

fn summarize(models: &[Model], filter: &ModelFilter) -> Vec<ModelSummary> {
  models.iter().map(|model| ModelSummary::new(model, filter)).collect()
}

pub async fn list_models(input: &Path, filter: &ModelFilterArgs, colors: &Colors) -> anyhow::Result<()> {
  let datamodel = DataModelLoader::open(input).await?.parse()?;
  let filter = ModelFilter::new(filter.include_models.as_deref(), filter.exclude_models.as_deref());

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["MODEL", "FIELDS", "REQUIRED", "STATUS"] {
    row.add_cell(Cell::new(header).fg(colors.label().into_comfy()));
  }
  table.set_header(row);

  for summary in summarize(&datamodel.models, &filter) {
    let status_color = if summary.included {
      colors.success()
    } else {
      colors.muted()
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&summary.name)
        .fg(colors.value().into_comfy())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(summary.fields)
        .fg(colors.primary().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(summary.required)
        .fg(colors.primary().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(summary.status()).fg(status_color.into_comfy()));
    table.add_row(row);
  }

  println!("{table}");

  if !datamodel.enums.is_empty() {
    let enums = datamodel.enums.iter().map(|item| item.name.as_str()).collect::<Vec<_>>();
    println!("\n{} {}", "Enums:".with(colors.label()), enums.join(", ").with(colors.value()));
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn simple_models() -> Vec<Model> {
    prisma_oas3_gen::Datamodel::from_json(include_str!("../../../fixtures/simple.json"))
      .unwrap()
      .models
  }

  #[test]
  fn test_summaries_follow_input_order() {
    let summaries = summarize(&simple_models(), &ModelFilter::default());

    let names: Vec<&str> = summaries.iter().map(|summary| summary.name.as_str()).collect();
    assert_eq!(names, vec!["User", "Post", "Profile"]);
    assert_eq!(summaries[0].fields, 7);
    assert_eq!(summaries[0].required, 5);
    assert!(summaries.iter().all(|summary| summary.included));
  }

  #[test]
  fn test_summaries_mark_filtered_models() {
    let filter = ModelFilter::new(Some("User,Post"), Some("Post"));
    let summaries = summarize(&simple_models(), &filter);

    let statuses: Vec<&str> = summaries.iter().map(ModelSummary::status).collect();
    assert_eq!(statuses, vec!["included", "filtered", "filtered"]);
  }
}
