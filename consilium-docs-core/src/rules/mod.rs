// Rules module - one file per convention
// - engine.rs: DocRule trait, RuleEngine and pattern compilation
// - canonical_spec.rs: canonical_spec_path must equal the required path
// - authority_order.rs: no reference to the .md authority document
// - plan_path.rs: phase_plan must not use the one-level-short path
// - api_key.rs: no API key length guidance weaker than the minimum

pub mod api_key;
pub mod authority_order;
pub mod canonical_spec;
pub mod engine;
pub mod plan_path;

pub use engine::*;
