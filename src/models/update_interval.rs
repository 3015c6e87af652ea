use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often the application should look for a newer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateInterval {
    #[default]
    Startup,
    Daily,
    Weekly,
    Monthly,
    Never,
}

impl UpdateInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateInterval::Startup => "STARTUP",
            UpdateInterval::Daily => "DAILY",
            UpdateInterval::Weekly => "WEEKLY",
            UpdateInterval::Monthly => "MONTHLY",
            UpdateInterval::Never => "NEVER",
        }
    }

    pub fn all() -> [UpdateInterval; 5] {
        [
            UpdateInterval::Startup,
            UpdateInterval::Daily,
            UpdateInterval::Weekly,
            UpdateInterval::Monthly,
            UpdateInterval::Never,
        ]
    }
}

impl FromStr for UpdateInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::all()
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| format!("Invalid update interval: {}", s))
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown or malformed values fall back to `STARTUP` instead of failing
/// the whole configuration file.
impl<'de> Deserialize<'de> for UpdateInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().unwrap_or_default(),
            Raw::Other(_) => UpdateInterval::default(),
        })
    }
}
