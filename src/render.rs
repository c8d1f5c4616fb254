//! Plain-text rendering of a frame for the terminal.

use std::fmt::Write;

use crate::dashboard::DashboardFrame;
use crate::trend::TrendPoint;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render_frame(frame: &DashboardFrame) -> String {
    let reading = &frame.reading;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}) Air Quality", frame.city, frame.region);
    let _ = writeln!(out, "as of {}", frame.generated_at.format("%H:%M"));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  AQI {:>4}  {} [{}]",
        reading.aqi, frame.status.tier, frame.status.color
    );
    let _ = writeln!(out, "  {}", frame.status.advisory);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Temperature  {:>4} °C", reading.temperature_c);
    let _ = writeln!(out, "  PM 2.5       {:>4} µg/m³", reading.pm25);
    let _ = writeln!(out, "  Humidity     {:>4} %", reading.humidity_percent);
    let _ = writeln!(out, "  Pollutant    {}", frame.primary_pollutant);
    let _ = writeln!(out);
    let _ = writeln!(out, "  24-hour trend  {}", sparkline(&frame.trend));
    out
}

pub fn sparkline(points: &[TrendPoint]) -> String {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.aqi), hi.max(p.aqi))
        });
    let span = max - min;
    points
        .iter()
        .map(|p| {
            if span <= f64::EPSILON {
                return SPARK_LEVELS[SPARK_LEVELS.len() / 2];
            }
            let ratio = (p.aqi - min) / span;
            let index = (ratio * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[index.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;

    fn point(hour: u32, aqi: f64) -> TrendPoint {
        TrendPoint { hour, aqi }
    }

    #[test]
    fn sparkline_spans_lowest_to_highest() {
        let line = sparkline(&[point(0, 10.0), point(1, 20.0), point(2, 30.0)]);
        assert_eq!(line.chars().count(), 3);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
    }

    #[test]
    fn flat_series_renders_midline() {
        assert_eq!(sparkline(&[point(0, 5.0), point(1, 5.0)]), "▅▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn report_mentions_every_metric() {
        let frame = Dashboard::default().frame("Goa").unwrap();
        let text = render_frame(&frame);
        assert!(text.contains("Panaji (Goa)"));
        assert!(text.contains(&frame.reading.aqi.to_string()));
        assert!(text.contains(frame.status.advisory));
        assert!(text.contains("PM 2.5"));
        assert!(text.contains("Humidity"));
    }
}
