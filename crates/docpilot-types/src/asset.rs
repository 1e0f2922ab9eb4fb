use serde::{Deserialize, Serialize};

/// Asset class shown in the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AssetCategory {
    Equity,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Private Equity")]
    PrivateEquity,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::FixedIncome => "Fixed Income",
            Self::RealEstate => "Real Estate",
            Self::PrivateEquity => "Private Equity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Ordinal weight used when averaging tiers (Low = 1, High = 3)
    pub fn score(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }

    /// Nearest tier for an averaged score
    pub fn from_score(score: f64) -> Self {
        if score < 1.5 {
            Self::Low
        } else if score < 2.5 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// One (period, value) sample of an asset's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PerformancePoint {
    pub month: String,
    pub value: f64,
}

impl PerformancePoint {
    pub fn new(month: impl Into<String>, value: f64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: AssetCategory,
    pub value: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    pub change_quarter: f64,
    pub risk_profile: RiskTier,
    pub performance_data: Vec<PerformancePoint>,
}

impl Asset {
    /// First word of the name, used as a chart label ("Vanguard")
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
