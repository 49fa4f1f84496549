pub mod plan;
pub mod problem;
