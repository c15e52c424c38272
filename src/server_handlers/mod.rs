pub mod submit;
pub mod docs;

pub use submit::*;
pub use docs::*;
