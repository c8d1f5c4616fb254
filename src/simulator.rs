use rand::Rng;
use serde::Serialize;

use crate::rng::city_rng;

/// Cities that start from the elevated base.
pub const HIGH_POLLUTION_CITIES: &[&str] = &[
    "New Delhi",
    "Patna",
    "Lucknow",
    "Chandigarh",
    "Kolkata",
    "Jaipur",
];

pub const HIGH_POLLUTION_BASE: i32 = 250;
pub const DEFAULT_BASE: i32 = 80;
pub const AQI_FLOOR: i32 = 10;
pub const PM25_RATIO: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvironmentalReading {
    pub aqi: i32,
    pub pm25: i32,
    pub temperature_c: i32,
    pub humidity_percent: i32,
}

pub fn is_high_pollution(city: &str) -> bool {
    HIGH_POLLUTION_CITIES.contains(&city)
}

pub fn base_aqi(city: &str) -> i32 {
    if is_high_pollution(city) {
        HIGH_POLLUTION_BASE
    } else {
        DEFAULT_BASE
    }
}

pub fn pm25_for(aqi: i32) -> i32 {
    (aqi as f64 * PM25_RATIO).floor() as i32
}

/// Simulated reading for `city`. Pure in the city name; draws offset,
/// temperature and humidity in that order from the city's stream.
pub fn generate_reading(city: &str) -> EnvironmentalReading {
    let mut rng = city_rng(city);
    let offset: i32 = rng.gen_range(-40..60);
    let aqi = (base_aqi(city) + offset).max(AQI_FLOOR);
    let temperature_c = rng.gen_range(15..38);
    let humidity_percent = rng.gen_range(30..90);
    EnvironmentalReading {
        aqi,
        pm25: pm25_for(aqi),
        temperature_c,
        humidity_percent,
    }
}
