pub mod classifier;
pub mod entities;
pub mod table;

pub use classifier::*;
pub use entities::*;
pub use table::*;
