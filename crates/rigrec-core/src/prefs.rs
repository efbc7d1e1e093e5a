use serde::{Deserialize, Serialize};

/// The price interval a user is shopping in.
///
/// Wire values are the hyphenated strings used by both the HTTP query
/// parameters and the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-700")]
    Under700,
    #[serde(rename = "700-999")]
    From700To999,
    #[serde(rename = "1000-1499")]
    From1000To1499,
    #[serde(rename = "1500-plus")]
    From1500Plus,
}

impl BudgetRange {
    /// Default used when a request omits the budget or sends an
    /// unrecognized value.
    pub const DEFAULT: Self = BudgetRange::From700To999;

    /// Parses a wire value, or `None` if it is not one of the four ranges.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "under-700" => Some(BudgetRange::Under700),
            "700-999" => Some(BudgetRange::From700To999),
            "1000-1499" => Some(BudgetRange::From1000To1499),
            "1500-plus" => Some(BudgetRange::From1500Plus),
            _ => None,
        }
    }

    /// Parses a possibly-missing wire value, falling back to
    /// [`BudgetRange::DEFAULT`] on absence or junk.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }

    /// The un-widened price interval for this range. The top range has no
    /// upper bound.
    #[must_use]
    pub fn price_band(self) -> PriceBand {
        match self {
            BudgetRange::Under700 => PriceBand {
                min: 0.0,
                max: Some(700.0),
            },
            BudgetRange::From700To999 => PriceBand {
                min: 700.0,
                max: Some(999.0),
            },
            BudgetRange::From1000To1499 => PriceBand {
                min: 1000.0,
                max: Some(1499.0),
            },
            BudgetRange::From1500Plus => PriceBand {
                min: 1500.0,
                max: None,
            },
        }
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetRange::Under700 => write!(f, "under-700"),
            BudgetRange::From700To999 => write!(f, "700-999"),
            BudgetRange::From1000To1499 => write!(f, "1000-1499"),
            BudgetRange::From1500Plus => write!(f, "1500-plus"),
        }
    }
}

/// The minimum storage capacity a user will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageTier {
    #[serde(rename = "256-512")]
    Small,
    #[serde(rename = "1tb")]
    OneTerabyte,
    #[serde(rename = "2tb")]
    TwoTerabyte,
    #[serde(rename = "none")]
    NoPreference,
}

impl StorageTier {
    /// Default used when a request omits the storage tier or sends an
    /// unrecognized value.
    pub const DEFAULT: Self = StorageTier::NoPreference;

    /// Parses a wire value, or `None` if it is not one of the four tiers.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "256-512" => Some(StorageTier::Small),
            "1tb" => Some(StorageTier::OneTerabyte),
            "2tb" => Some(StorageTier::TwoTerabyte),
            "none" => Some(StorageTier::NoPreference),
            _ => None,
        }
    }

    /// Parses a possibly-missing wire value, falling back to
    /// [`StorageTier::DEFAULT`] on absence or junk.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }

    /// Minimum gigabytes implied by this tier, or `None` for no constraint.
    #[must_use]
    pub fn min_storage_gb(self) -> Option<u32> {
        match self {
            StorageTier::Small => Some(256),
            StorageTier::OneTerabyte => Some(1024),
            StorageTier::TwoTerabyte => Some(2048),
            StorageTier::NoPreference => None,
        }
    }
}

impl std::fmt::Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageTier::Small => write!(f, "256-512"),
            StorageTier::OneTerabyte => write!(f, "1tb"),
            StorageTier::TwoTerabyte => write!(f, "2tb"),
            StorageTier::NoPreference => write!(f, "none"),
        }
    }
}

/// The two enumerated preferences a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub budget: BudgetRange,
    pub storage: StorageTier,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            budget: BudgetRange::DEFAULT,
            storage: StorageTier::DEFAULT,
        }
    }
}

/// A price interval. `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBand {
    /// Widens the band by a fractional tolerance: the minimum shrinks by
    /// `tolerance` (a zero minimum stays zero) and the maximum grows by
    /// `tolerance` (an unbounded maximum stays unbounded).
    #[must_use]
    pub fn widened(self, tolerance: f64) -> Self {
        let min = if self.min > 0.0 {
            self.min * (1.0 - tolerance)
        } else {
            0.0
        };
        Self {
            min,
            max: self.max.map(|m| m * (1.0 + tolerance)),
        }
    }

    /// Whether `price` falls within the band, inclusive of both ends.
    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |m| price <= m)
    }

    /// Midpoint of the band. An unbounded band uses `min * 1.2` as a
    /// synthetic midpoint so budget-fit scoring still has an anchor.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        match self.max {
            Some(max) => (self.min + max) / 2.0,
            None => self.min * 1.2,
        }
    }
}
