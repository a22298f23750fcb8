pub mod builder;
pub mod filter;
pub mod options;
pub mod orchestrator;
pub mod render;
pub mod schema;
pub mod type_mapper;
pub mod warnings;

#[cfg(test)]
mod tests;
