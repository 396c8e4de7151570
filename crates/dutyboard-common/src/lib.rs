pub mod grid;
pub mod highlight;
pub mod value;

pub use grid::*;
pub use highlight::*;
pub use value::*;
