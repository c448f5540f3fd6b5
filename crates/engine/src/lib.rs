pub mod classify;
pub mod columns;
pub mod dataset;
pub mod engine;
pub mod extract;
pub mod followups;
pub mod lexicon;
pub mod locale;
pub mod messages;
pub mod ops;
pub mod result;
pub mod sampler;
pub mod value;

pub use dataset::{Dataset, Row, Sheet};
pub use engine::{execute, execute_with};
pub use lexicon::Intent;
pub use locale::Locale;
pub use result::{QueryResult, DISPLAY_LIMIT};
pub use sampler::{ClockSampler, FixedSampler, Sampler};
pub use value::Value;
