//! Combat systems

pub mod damage;
pub mod shooting;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod damage_tests;

// Re-export all systems
pub use damage::*;
pub use shooting::*;
