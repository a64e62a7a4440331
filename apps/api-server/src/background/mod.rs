//! Background jobs.

mod scheduler;

pub use scheduler::{SchedulerConfig, start_background_jobs};
