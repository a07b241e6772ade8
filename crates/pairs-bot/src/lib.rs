#![deny(warnings)]
pub mod engine;
pub mod knowledge;

pub use engine::DecisionEngine;
pub use knowledge::KnowledgeTracker;
