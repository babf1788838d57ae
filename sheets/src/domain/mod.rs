mod row;
mod sheet_name;
mod write_response;

pub use row::*;
pub use sheet_name::*;
pub use write_response::*;
