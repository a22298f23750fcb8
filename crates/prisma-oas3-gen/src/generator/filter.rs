use indexmap::IndexSet;

use crate::{dmmf::Model, generator::options::GenerationOptions};

/// Splits a comma-separated name list, trimming each entry.
///
/// Returns `None` when the list is unset or holds no names once blanks are
/// dropped; both mean "no filter".
#[must_use]
pub fn parse_name_list(list: Option<&str>) -> Option<IndexSet<String>> {
  let names: IndexSet<String> = list?
    .split(',')
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .map(String::from)
    .collect();

  (!names.is_empty()).then_some(names)
}

/// Which filter list a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum FilterList {
  #[strum(serialize = "includeModels")]
  Include,
  #[strum(serialize = "excludeModels")]
  Exclude,
}

/// Include/exclude selection of the models that receive a schema.
///
/// The include list is applied first, then the exclude list, so a name listed
/// in both is excluded. Enums are never filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
  include: Option<IndexSet<String>>,
  exclude: Option<IndexSet<String>>,
}

impl ModelFilter {
  #[must_use]
  pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
    Self {
      include: parse_name_list(include),
      exclude: parse_name_list(exclude),
    }
  }

  #[must_use]
  pub fn from_options(options: &GenerationOptions) -> Self {
    Self::new(options.include_models.as_deref(), options.exclude_models.as_deref())
  }

  #[must_use]
  pub const fn is_unfiltered(&self) -> bool {
    self.include.is_none() && self.exclude.is_none()
  }

  #[must_use]
  pub fn allows(&self, name: &str) -> bool {
    let included = self.include.as_ref().is_none_or(|names| names.contains(name));
    let excluded = self.exclude.as_ref().is_some_and(|names| names.contains(name));
    included && !excluded
  }

  /// Models that pass the filter, in input order.
  #[must_use]
  pub fn apply<'a>(&self, models: &'a [Model]) -> Vec<&'a Model> {
    models.iter().filter(|model| self.allows(&model.name)).collect()
  }

  /// Filter names that match no model. They are ignored when filtering.
  #[must_use]
  pub fn unmatched_names<'f>(&'f self, models: &[Model]) -> Vec<(FilterList, &'f str)> {
    let known: IndexSet<&str> = models.iter().map(|model| model.name.as_str()).collect();

    let lists = [
      (FilterList::Include, self.include.as_ref()),
      (FilterList::Exclude, self.exclude.as_ref()),
    ];

    lists
      .into_iter()
      .filter_map(|(list, names)| names.map(|names| (list, names)))
      .flat_map(|(list, names)| names.iter().map(move |name| (list, name.as_str())))
      .filter(|(_, name)| !known.contains(name))
      .collect()
  }
}
