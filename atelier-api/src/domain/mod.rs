pub mod aggregator;
pub mod calendar;
pub mod dates;
mod error;
pub mod forms;
pub mod insights;
pub mod models;
pub mod ports;
mod roster;
pub mod services;
pub mod table;
mod window;

pub use error::*;
pub use roster::WorkerRoster;
pub use window::TimeWindow;
