pub mod types;
pub mod turn;

pub use types::*;
pub use turn::*;
