mod ids;
mod project;
mod worker;

pub use ids::*;
pub use project::*;
pub use worker::*;

#[cfg(test)]
pub(crate) use project::fixtures;
