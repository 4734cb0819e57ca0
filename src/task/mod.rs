pub mod manager;
pub mod queue;
pub mod types;


pub use manager::*;
pub use queue::*;
pub use types::*;
