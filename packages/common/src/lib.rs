pub mod storage;
pub mod visitor;

pub use storage::*;
pub use visitor::*;
