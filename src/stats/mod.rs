// Data normalization and query engine for a season of team statistics.

pub mod alias;
pub mod dataset;
pub mod fields;
pub mod loader;
pub mod position;
pub mod query;
