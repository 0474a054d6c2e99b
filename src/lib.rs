//! Weather probability estimates for a point and a date.
//!
//! A real one-day observation from NASA POWER is bucketed into coarse
//! probabilities; without one, probabilities are simulated from latitude,
//! longitude and season.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
