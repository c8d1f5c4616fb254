use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;

use crate::{
    catalog::{Catalog, CatalogKind},
    error::Result,
    rng::fresh_rng,
    severity::{classify, SeverityTier},
    simulator::{generate_reading, EnvironmentalReading},
    trend::{generate_trend, TrendPoint, TREND_POINTS},
};

pub const PRIMARY_POLLUTANT: &str = "PM2.5";

#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub tier: SeverityTier,
    pub color: &'static str,
    pub advisory: &'static str,
}

impl From<SeverityTier> for TierView {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            color: tier.color(),
            advisory: tier.advisory(),
        }
    }
}

/// Everything a presentation layer needs to draw one region.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardFrame {
    pub region: String,
    pub city: String,
    pub reading: EnvironmentalReading,
    pub status: TierView,
    pub primary_pollutant: &'static str,
    pub trend: Vec<TrendPoint>,
    pub generated_at: DateTime<Local>,
}

/// Region → city → reading → tier → trend.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    catalog: Catalog,
}

impl Dashboard {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            catalog: Catalog::new(kind),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn frame(&self, region: &str) -> Result<DashboardFrame> {
        self.frame_with_rng(region, &mut fresh_rng())
    }

    /// Same as [`Dashboard::frame`] but draws the trend from `rng`.
    pub fn frame_with_rng<R: Rng + ?Sized>(
        &self,
        region: &str,
        rng: &mut R,
    ) -> Result<DashboardFrame> {
        let city = self.catalog.resolve_city(region)?;
        let reading = generate_reading(city);
        let tier = classify(reading.aqi);
        let trend = generate_trend(reading.aqi, TREND_POINTS, rng);
        tracing::debug!(region, city, aqi = reading.aqi, %tier, "computed frame");
        Ok(DashboardFrame {
            region: region.to_string(),
            city: city.to_string(),
            reading,
            status: tier.into(),
            primary_pollutant: PRIMARY_POLLUTANT,
            trend,
            generated_at: Local::now(),
        })
    }

    /// One frame per catalog region, in display order.
    pub fn frames(&self) -> Result<Vec<DashboardFrame>> {
        let mut rng = fresh_rng();
        self.catalog
            .regions()
            .map(|region| self.frame_with_rng(region, &mut rng))
            .collect()
    }
}
