use std::sync::Arc;

use docpilot_types::{Asset, AssetCatalog, AssetCategory, RiskTier};
use serde::Serialize;

/// `$45.9M` style display of a raw dollar amount
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QuarterlyShift {
    /// First word of the asset name
    pub label: String,
    pub change_quarter: f64,
    pub negative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AssetRow {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub value: f64,
    pub value_display: String,
    pub change_24h: f64,
    pub risk_profile: RiskTier,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            category: asset.category,
            value: asset.value,
            value_display: format_millions(asset.value),
            change_24h: asset.change_24h,
            risk_profile: asset.risk_profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardOverview {
    pub total_aum: f64,
    pub total_aum_display: String,
    pub quarterly_shift: Vec<QuarterlyShift>,
    /// Value-weighted average of the asset tiers
    pub risk_score: f64,
    pub risk_tier: RiskTier,
    pub assets: Vec<AssetRow>,
}

/// Read-only metrics over the asset catalog
#[derive(Debug, Clone)]
pub struct DashboardView {
    catalog: Arc<AssetCatalog>,
}

impl DashboardView {
    pub fn new(catalog: Arc<AssetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn assets(&self) -> &[Asset] {
        self.catalog.assets()
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.catalog.get(id)
    }

    pub fn overview(&self) -> DashboardOverview {
        let assets = self.catalog.assets();
        let total_aum: f64 = assets.iter().map(|asset| asset.value).sum();

        let risk_score = if total_aum > 0.0 {
            assets
                .iter()
                .map(|asset| asset.value * asset.risk_profile.score())
                .sum::<f64>()
                / total_aum
        } else {
            RiskTier::Low.score()
        };

        DashboardOverview {
            total_aum,
            total_aum_display: format_millions(total_aum),
            quarterly_shift: assets
                .iter()
                .map(|asset| QuarterlyShift {
                    label: asset.short_name().to_string(),
                    change_quarter: asset.change_quarter,
                    negative: asset.change_quarter < 0.0,
                })
                .collect(),
            risk_score,
            risk_tier: RiskTier::from_score(risk_score),
            assets: assets.iter().map(AssetRow::from).collect(),
        }
    }
}
