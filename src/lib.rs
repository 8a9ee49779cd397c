pub mod board;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;
