pub mod constants;
pub mod dots;
pub mod field;
pub mod layout;
pub mod motion;

pub use dots::*;
pub use field::*;
pub use layout::*;
pub use motion::*;
