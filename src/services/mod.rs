pub mod app_config;
pub mod charts;
pub mod estimator;
pub mod export;
pub mod geocoding;
pub mod nasa_power;
pub mod sample_provider;
pub mod series_synthesizer;
