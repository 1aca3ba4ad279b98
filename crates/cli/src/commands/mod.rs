mod records;
mod serve;

pub use records::{add, get, list, remove};
pub use serve::serve;
