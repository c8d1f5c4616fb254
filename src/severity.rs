//! AQI severity tiers.

use std::fmt;

use serde::Serialize;

/// Severity tiers in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SeverityTier {
    Excellent,
    Good,
    Moderate,
    Poor,
    Severe,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::Excellent,
        SeverityTier::Good,
        SeverityTier::Moderate,
        SeverityTier::Poor,
        SeverityTier::Severe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "Excellent",
            SeverityTier::Good => "Good",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Poor => "Poor",
            SeverityTier::Severe => "Severe",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "#10b981",
            SeverityTier::Good => "#22c55e",
            SeverityTier::Moderate => "#f59e0b",
            SeverityTier::Poor => "#ef4444",
            SeverityTier::Severe => "#7f1d1d",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "Perfect for a walk! Safe to go outside.",
            SeverityTier::Good => "Good air quality. Have a great day!",
            SeverityTier::Moderate => "A bit hazy. Sensitive groups should be careful.",
            SeverityTier::Poor => "Consider wearing a mask outdoors today.",
            SeverityTier::Severe => "Hazardous! Stay indoors and keep the purifier on.",
        }
    }

    /// Inclusive upper bound of the tier, `None` for the open-ended top tier.
    pub fn upper_bound(self) -> Option<i32> {
        match self {
            SeverityTier::Excellent => Some(50),
            SeverityTier::Good => Some(100),
            SeverityTier::Moderate => Some(200),
            SeverityTier::Poor => Some(300),
            SeverityTier::Severe => None,
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First tier whose upper bound covers `aqi`.
pub fn classify(aqi: i32) -> SeverityTier {
    SeverityTier::ALL
        .into_iter()
        .find(|tier| tier.upper_bound().map_or(true, |bound| aqi <= bound))
        .unwrap_or(SeverityTier::Severe)
}
