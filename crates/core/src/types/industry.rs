//! Business industry categories.

use serde::{Deserialize, Serialize};

/// Industry category for a website draft.
///
/// Selects which template flavor the site generator uses. Maps to the
/// backend's lowercase string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Ecommerce,
    Services,
    Fashion,
    Food,
    Tech,
    General,
}

impl Industry {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Ecommerce,
        Self::Services,
        Self::Fashion,
        Self::Food,
        Self::Tech,
        Self::General,
    ];

    /// The backend's wire value for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Services => "services",
            Self::Fashion => "fashion",
            Self::Food => "food",
            Self::Tech => "tech",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecommerce" => Ok(Self::Ecommerce),
            "services" => Ok(Self::Services),
            "fashion" => Ok(Self::Fashion),
            "food" => Ok(Self::Food),
            "tech" => Ok(Self::Tech),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid industry: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ecommerce() {
        assert_eq!(Industry::default(), Industry::Ecommerce);
    }

    #[test]
    fn test_roundtrip_all() {
        for industry in Industry::ALL {
            let parsed: Industry = industry.as_str().parse().unwrap();
            assert_eq!(parsed, industry);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("retail".parse::<Industry>().is_err());
        assert!("Ecommerce".parse::<Industry>().is_err()); // case-sensitive
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Industry::Food).unwrap();
        assert_eq!(json, "\"food\"");

        let parsed: Industry = serde_json::from_str("\"tech\"").unwrap();
        assert_eq!(parsed, Industry::Tech);
    }
}
