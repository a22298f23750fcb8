pub mod generate;
pub mod list;
pub mod manifest;

pub use generate::{GenerateConfig, generate_schemas};
pub use list::list_models;
pub use manifest::print_manifest;
