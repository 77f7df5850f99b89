pub mod class_value;
pub mod error;
pub mod props;
pub mod result;

pub use class_value::*;
pub use error::*;
pub use props::*;
pub use result::*;
