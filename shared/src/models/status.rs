//! Status Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active/inactive flag shared by every entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    #[serde(alias = "Active", alias = "1")]
    Active,
    #[serde(alias = "Inactive", alias = "0")]
    Inactive,
}

impl Status {
    /// The opposite status
    pub fn toggle(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "1" => Ok(Self::Active),
            "inactive" | "0" => Ok(Self::Inactive),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Status::Active.toggle(), Status::Inactive);
        assert_eq!(Status::Active.toggle().toggle(), Status::Active);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Inactive).unwrap(), "\"inactive\"");
        let s: Status = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(s, Status::Active);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("INACTIVE".parse::<Status>().unwrap(), Status::Inactive);
        assert!("archived".parse::<Status>().is_err());
    }
}
