//! Player systems

pub mod movement;
pub mod reactions;
pub mod stance;


// Re-export all systems
pub use movement::*;
pub use reactions::*;
pub use stance::*;
