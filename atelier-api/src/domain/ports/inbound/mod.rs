mod projects;

pub use projects::*;
