use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

pub const TREND_POINTS: usize = 24;
pub const TREND_NOISE_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub hour: u32,
    pub aqi: f64,
}

/// `count` samples of `aqi` plus scaled standard-normal noise, one per hour.
pub fn generate_trend<R: Rng + ?Sized>(aqi: i32, count: usize, rng: &mut R) -> Vec<TrendPoint> {
    (0..count)
        .map(|hour| {
            let noise: f64 = StandardNormal.sample(&mut *rng);
            TrendPoint {
                hour: hour as u32,
                aqi: aqi as f64 + noise * TREND_NOISE_SCALE,
            }
        })
        .collect()
}
