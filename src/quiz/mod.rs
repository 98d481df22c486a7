pub mod questions;
pub mod answers;
pub mod form;

pub use questions::*;
pub use answers::*;
pub use form::*;
