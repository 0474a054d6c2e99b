pub mod location;
pub mod probability;
pub mod report;
pub mod weather_sample;
