use std::path::Path;

use thiserror::Error;

use crate::asset::{Asset, AssetCategory, PerformancePoint, RiskTier};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read asset catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid asset catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only reference data behind the dashboard and the copilot context
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// The three demo holdings the dashboard ships with
    pub fn demo() -> Self {
        let series = |values: [f64; 6]| -> Vec<PerformancePoint> {
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .iter()
                .zip(values)
                .map(|(month, value)| PerformancePoint::new(*month, value))
                .collect()
        };

        Self::new(vec![
            Asset {
                id: "1".to_string(),
                name: "Vanguard Global Equity".to_string(),
                category: AssetCategory::Equity,
                value: 12_500_000.0,
                change_24h: 1.2,
                change_quarter: -4.5,
                risk_profile: RiskTier::Medium,
                performance_data: series([
                    12_000_000.0, 12_200_000.0, 12_500_000.0, 12_300_000.0, 12_100_000.0, 12_500_000.0,
                ]),
            },
            Asset {
                id: "2".to_string(),
                name: "BlackRock Core Bond".to_string(),
                category: AssetCategory::FixedIncome,
                value: 8_400_000.0,
                change_24h: -0.1,
                change_quarter: 2.1,
                risk_profile: RiskTier::Low,
                performance_data: series([
                    8_100_000.0, 8_200_000.0, 8_250_000.0, 8_300_000.0, 8_350_000.0, 8_400_000.0,
                ]),
            },
            Asset {
                id: "3".to_string(),
                name: "Manhattan Commercial REIT".to_string(),
                category: AssetCategory::RealEstate,
                value: 25_000_000.0,
                change_24h: -0.5,
                change_quarter: -12.4,
                risk_profile: RiskTier::High,
                performance_data: series([
                    28_000_000.0, 27_500_000.0, 27_000_000.0, 26_500_000.0, 26_000_000.0, 25_000_000.0,
                ]),
            },
        ])
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// JSON array of every asset, as handed to the copilot model
    pub fn snapshot_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(&self.assets)?)
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_catalog() {
        let catalog = AssetCatalog::demo();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("3").unwrap().change_quarter, -12.4);
        assert!(catalog.assets().iter().all(|a| a.performance_data.len() == 6));
        assert!(catalog.get("4").is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let catalog = AssetCatalog::demo();
        let json = catalog.snapshot_json().unwrap();
        assert!(json.contains("\"changeQuarter\":-12.4"));
        assert_eq!(AssetCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", AssetCatalog::demo().snapshot_json().unwrap()).unwrap();

        let loaded = AssetCatalog::from_path(file.path()).unwrap();
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_invalid_catalog() {
        assert!(matches!(AssetCatalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
