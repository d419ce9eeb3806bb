// Core algorithm exports
pub mod age;
pub mod assessor;
pub mod classifier;
pub mod triggers;

pub use age::age_in_years;
pub use assessor::RiskAssessor;
pub use classifier::classify;
pub use triggers::{count_triggers, find_triggers, TRIGGER_TERMS};
