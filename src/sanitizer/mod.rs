// Sanitizer module - textual neutralization of dynamic execution calls

pub mod rule;

pub use rule::{SubstitutionRule, EXEC_TOKEN, PRINT_TOKEN};
