use std::sync::Arc;

use docpilot_types::{Asset, AssetCatalog};

/// Picks the asset a chat query is about, if any
pub trait AssetLookup: Send + Sync {
    fn find(&self, query: &str) -> Option<Asset>;
}

/// Case-insensitive substring match against a fixed keyword list
///
/// The first keyword (in list order) found in the query wins.
#[derive(Debug, Clone)]
pub struct KeywordAssetLookup {
    catalog: Arc<AssetCatalog>,
    keywords: Vec<(String, String)>,
}

impl KeywordAssetLookup {
    pub fn new(catalog: Arc<AssetCatalog>) -> Self {
        Self::with_keywords(
            catalog,
            [("vanguard", "1"), ("blackrock", "2"), ("manhattan", "3")],
        )
    }

    /// `keywords` pairs a lowercase keyword with an asset id
    pub fn with_keywords<I, K, V>(catalog: Arc<AssetCatalog>, keywords: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            catalog,
            keywords: keywords
                .into_iter()
                .map(|(keyword, id)| (keyword.into().to_lowercase(), id.into()))
                .collect(),
        }
    }
}

impl AssetLookup for KeywordAssetLookup {
    fn find(&self, query: &str) -> Option<Asset> {
        let query = query.to_lowercase();
        self.keywords
            .iter()
            .find(|(keyword, _)| query.contains(keyword.as_str()))
            .and_then(|(_, id)| self.catalog.get(id).cloned())
    }
}
