use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;

use crate::ui::{Colors, GenerateCommand};
use prisma_oas3_gen::{
  GeneratedFile, GeneratedOutput, GenerationOptions, GenerationStats, Orchestrator, PartialGenerationOptions,
  dmmf::DataModelLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub config: Option<PathBuf>,
  pub overrides: PartialGenerationOptions,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      config,
      title,
      description,
      models,
      yaml,
      json,
      jsdoc,
      verbose,
      quiet,
    } = command;

    let overrides = PartialGenerationOptions {
      output: output.as_ref().map(|path| path.display().to_string()),
      title,
      description,
      include_models: models.include_models,
      exclude_models: models.exclude_models,
      generate_yaml: yaml,
      generate_json: json,
      generate_js_doc: jsdoc,
    };

    Self {
      input,
      output,
      config,
      overrides,
      verbose,
      quiet,
    }
  }

  /// Layers defaults, the config file and the command line flags, in that order.
  async fn load_options(&self) -> anyhow::Result<GenerationOptions> {
    let from_file = match &self.config {
      Some(path) => {
        let raw = tokio::fs::read_to_string(path).await?;
        PartialGenerationOptions::from_json(&raw)?
      }
      None => PartialGenerationOptions::default(),
    };

    Ok(GenerationOptions::resolve(from_file.merge(self.overrides.clone())))
  }

  fn output_dir(&self, options: &GenerationOptions) -> PathBuf {
    self.output.clone().unwrap_or_else(|| PathBuf::from(&options.output))
  }
}

/// Writes every rendered encoding into `dir`, creating it first.
async fn write_outputs(dir: &Path, output: &GeneratedOutput) -> anyhow::Result<Vec<PathBuf>> {
  tokio::fs::create_dir_all(dir).await?;

  let mut written = Vec::with_capacity(output.files.len());
  for file in &output.files {
    let path = dir.join(file.file_name());
    tokio::fs::write(&path, &file.content).await?;
    written.push(path);
  }
  Ok(written)
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "           {:<22} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading data model from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, options: &GenerationOptions) {
    let formats = options.encodings().iter().join(", ");
    let formats = if formats.is_empty() { "no output".to_string() } else { formats };
    self.info(
      &format!("Generating OpenAPI schemas ({formats})...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Schemas generated:", stats.schemas_generated().to_string());
    self.stat(
      "",
      format!("{} of {} models", stats.models_generated, stats.models_total),
    );
    self.stat("", format!("{} enums", stats.enums_generated));
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  /// Filter mismatches are always shown; degraded fields only with `--verbose`.
  fn print_warnings(&self, stats: &GenerationStats) {
    let shown = stats
      .warnings
      .iter()
      .filter(|warning| self.config.verbose || !warning.is_degraded_field())
      .collect_vec();
    if shown.is_empty() {
      return;
    }

    println!();
    for warning in shown {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, dir: &Path, files: &[GeneratedFile]) {
    let names = files.iter().map(GeneratedFile::file_name).join(", ");
    self.info(
      &format!("Writing {names} to: {}", dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_written(&self, paths: &[PathBuf]) {
    if self.config.verbose && !self.config.quiet {
      for path in paths {
        println!("           {}", path.display().to_string().with(self.colors.muted()));
      }
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated OpenAPI schemas".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_schemas(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let datamodel = DataModelLoader::open(&config.input).await?.parse()?;
  let options = config.load_options().await?;
  let output_dir = config.output_dir(&options);

  logger.log_generating(&options);
  let output = Orchestrator::new(datamodel, options).generate()?;
  logger.print_statistics(&output.stats);

  if !output.files.is_empty() {
    logger.log_writing(&output_dir, &output.files);
    let written = write_outputs(&output_dir, &output).await?;
    logger.log_written(&written);
  }

  logger.log_success();
  Ok(())
}
