pub mod document;
pub mod error;
pub mod lagrange;
pub mod points;
pub mod radix;
pub mod select;
pub mod solver;

pub type ShareIndex = u32;

pub use document::*;
pub use error::*;
pub use lagrange::*;
pub use points::*;
pub use radix::*;
pub use select::*;
pub use solver::*;
