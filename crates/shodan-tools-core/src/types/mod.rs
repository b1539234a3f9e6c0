mod args;
mod descriptor;
mod result;
mod schema;

pub use args::*;
pub use descriptor::*;
pub use result::*;
pub use schema::*;
