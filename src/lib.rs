//! # Spot Engine
//!
//! Jump-run spot calculation for parachute operations: line of flight, exit
//! offsets and canopy reachability circles from a wind profile.

// Re-export the main types and functions
pub use canopy::Circle;
pub use config::SpotConfig;
pub use error::{SpotError, SpotResult};
pub use spot::{calculate_spot, RedLight, Spot, SpotCalculator, SpotInput};
pub use wind::{Wind, WindEstimator};

// Module declarations
pub mod angles;
pub mod atmosphere;
pub mod canopy;
pub mod config;
pub mod constants;
mod error;
pub mod freefall;
pub mod jump_run;
pub mod navigation;
mod spot;
pub mod units;
pub mod wind;
