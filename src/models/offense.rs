use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single moderation infraction, timestamps in server-epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOffense")]
pub struct Offense {
    #[serde(rename = "createdAt")]
    pub created_at_seconds: i64,
    /// Advisory only; the warning decision never reads it
    #[serde(rename = "expiresAt")]
    pub expires_at_seconds: i64,
}

impl Offense {
    pub fn new(created_at_seconds: i64, expires_at_seconds: i64) -> Self {
        Self {
            created_at_seconds,
            expires_at_seconds,
        }
    }

    /// Age in whole seconds relative to `now_ms`
    pub fn age_seconds(&self, now_ms: i64) -> i64 {
        now_ms.div_euclid(1000).saturating_sub(self.created_at_seconds)
    }
}

/// Sessions deliver offense timestamps as strings, responses sometimes as numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Seconds {
    Number(i64),
    Text(String),
}

impl Seconds {
    fn parse(self, field: &str) -> Result<i64, Error> {
        match self {
            Seconds::Number(n) => Ok(n),
            Seconds::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidTimestamp(format!("{}: {:?}", field, s))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOffense {
    created_at: Seconds,
    expires_at: Option<Seconds>,
}

impl TryFrom<RawOffense> for Offense {
    type Error = Error;

    fn try_from(raw: RawOffense) -> Result<Self, Self::Error> {
        let created_at_seconds = raw.created_at.parse("createdAt")?;
        let expires_at_seconds = match raw.expires_at {
            Some(s) => s.parse("expiresAt")?,
            None => 0,
        };

        Ok(Self::new(created_at_seconds, expires_at_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_string_seconds() {
        let offense: Offense =
            serde_json::from_str(r#"{"createdAt": "-60", "expiresAt": "1000"}"#).unwrap();
        assert_eq!(offense, Offense::new(-60, 1000));
    }

    #[test]
    fn test_parses_numeric_seconds() {
        let offense: Offense =
            serde_json::from_str(r#"{"createdAt": 1700000000, "expiresAt": 1700003600}"#).unwrap();
        assert_eq!(offense.created_at_seconds, 1_700_000_000);
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        let result: Result<Offense, _> =
            serde_json::from_str(r#"{"createdAt": "yesterday", "expiresAt": "1000"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_age_seconds() {
        let offense = Offense::new(-60, 1000);
        assert_eq!(offense.age_seconds(0), 60);
        assert_eq!(offense.age_seconds(30_000), 90);
    }

    #[test]
    fn test_age_saturates_on_extreme_timestamps() {
        let offense: Offense = serde_json::from_str(
            r#"{"createdAt": "-9223372036854775808", "expiresAt": "0"}"#,
        )
        .unwrap();
        assert_eq!(offense.age_seconds(1_700_000_000_000), i64::MAX);
        assert_eq!(Offense::new(i64::MAX, 0).age_seconds(-1000), i64::MIN);
    }
}
