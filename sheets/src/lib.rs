mod client;
pub mod domain;
mod sheets_url;

pub use client::*;
pub use domain::{RawRow, SheetName, WriteResponse};
pub use sheets_url::*;
