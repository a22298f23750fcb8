pub mod refs;
pub mod text;

pub(crate) use refs::{parse_schema_ref_name, schema_ref_path};
pub(crate) use text::{normalize_description, yaml_scalar};
