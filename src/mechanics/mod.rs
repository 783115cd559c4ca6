pub mod cost;
pub mod econ;
pub mod fans;

pub use cost::*;
pub use econ::*;
pub use fans::*;
