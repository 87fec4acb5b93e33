//! Supported faucet assets.

use core::fmt;
use core::str::FromStr;

use crate::error::FaucetError;

/// Token identifiers the faucet can mint.
///
/// Case-insensitive on the wire; the lowercase form selects the mint
/// endpoint path, the uppercase label is for selector UIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Lunc,
    Juris,
}

impl AssetId {
    /// Every asset the faucet supports.
    pub const ALL: [AssetId; 2] = [AssetId::Lunc, AssetId::Juris];

    /// Lowercase wire form, used in the mint endpoint path.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetId::Lunc => "lunc",
            AssetId::Juris => "juris",
        }
    }

    /// Uppercase display label.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetId {
    type Err = FaucetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lunc" => Ok(AssetId::Lunc),
            "juris" => Ok(AssetId::Juris),
            _ => Err(FaucetError::UnsupportedAsset {
                asset: s.to_string(),
            }),
        }
    }
}
