pub mod catalog;
pub mod classifier;
pub mod combinations;
pub mod engine;
pub mod gaps;
pub mod handlers;
pub mod models;
pub mod monthly_plan;
pub mod next_steps;
pub mod overrides;
pub mod tokenizer;
pub mod validation;
