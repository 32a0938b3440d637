use serde::{Deserialize, Serialize};

/// Asset classification, as reported by the upstream analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Stock,
    Crypto,
}

impl AssetKind {
    /// Normalize a symbol for lookup.
    ///
    /// Symbols are trimmed and uppercased; crypto symbols trade as
    /// `<BASE>-USD` pairs, so the suffix is appended when absent.
    /// Normalization is idempotent: applying it twice yields the same string.
    pub fn normalize_symbol(&self, symbol: &str) -> String {
        let symbol = symbol.trim().to_uppercase();
        match self {
            AssetKind::Crypto if !symbol.ends_with("-USD") => format!("{symbol}-USD"),
            _ => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_normalization_appends_suffix() {
        assert_eq!(AssetKind::Crypto.normalize_symbol("BTC"), "BTC-USD");
    }

    #[test]
    fn test_crypto_normalization_is_idempotent() {
        let once = AssetKind::Crypto.normalize_symbol("BTC");
        let twice = AssetKind::Crypto.normalize_symbol(&once);
        assert_eq!(once, "BTC-USD");
        assert_eq!(twice, "BTC-USD");
    }

    #[test]
    fn test_stock_normalization_uppercases_only() {
        assert_eq!(AssetKind::Stock.normalize_symbol(" aapl "), "AAPL");
    }

    #[test]
    fn test_asset_kind_serde() {
        assert_eq!(serde_json::to_string(&AssetKind::Stock).unwrap(), "\"stock\"");
        let kind: AssetKind = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(kind, AssetKind::Crypto);
    }
}
