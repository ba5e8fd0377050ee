pub mod domain;
pub mod models;
pub mod processing;
pub mod routes;

/// Separator between a requirement identifier and its description,
/// split on the first occurrence only.
pub const ID_SEPARATOR: char = '-';
