use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "prisma-oas3-gen")]
#[command(author, version, about = "Prisma data model to OpenAPI schema generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Prisma data model
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate OpenAPI component schemas from a Prisma data model
  Generate(GenerateCommand),
  /// Print the generator manifest as JSON
  Manifest,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the DMMF document (JSON, or YAML with a .yaml/.yml extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the schema files are written to [default: ./openapi]
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,

  /// JSON generator config; flags given on the command line take precedence
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Title of the generated document
  #[arg(long, value_name = "TITLE")]
  pub title: Option<String>,

  /// Description of the generated document
  #[arg(long, value_name = "TEXT")]
  pub description: Option<String>,

  #[command(flatten)]
  pub models: ModelFilterArgs,

  /// Write openapi.yaml
  #[arg(long, value_name = "BOOL")]
  pub yaml: Option<bool>,

  /// Write openapi.json
  #[arg(long, value_name = "BOOL")]
  pub json: Option<bool>,

  /// Write openapi.js with @openapi comment blocks
  #[arg(long, value_name = "BOOL")]
  pub jsdoc: Option<bool>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelFilterArgs {
  /// Generate schemas only for these models (comma-separated names)
  #[arg(long, value_name = "MODELS")]
  pub include_models: Option<String>,

  /// Skip these models, applied after --include-models (comma-separated names)
  #[arg(long, value_name = "MODELS")]
  pub exclude_models: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every model with its field count and filter status
  Models {
    /// Path to the DMMF document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[command(flatten)]
    filter: ModelFilterArgs,
  },
}
