/// A single day's point observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    /// Mean air temperature at 2 m, °C.
    pub temperature: f64,
    /// Corrected total precipitation, mm.
    pub precipitation: f64,
    /// Wind speed at 10 m, m/s.
    pub wind_speed: f64,
}
