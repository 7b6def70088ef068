//! Line classification.
//!
//! - [`action::Action`]: the closed set of things a line of input can ask for
//! - [`classifier::classify`]: maps a raw line to an action and its argument text

pub mod action;
pub mod classifier;
