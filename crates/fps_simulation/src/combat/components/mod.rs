//! Combat components

pub mod health;
pub mod weapon;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod health_tests;

// Re-export all components
pub use health::*;
pub use weapon::*;
