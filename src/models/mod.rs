pub mod download;
pub mod events;
pub mod generation;

pub use download::*;
pub use events::*;
pub use generation::*;
