use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Region a user's dates are formatted for. The wire form is the bare
/// variant name (`US`, `INTL`), case-sensitive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Locale {
    #[default]
    US,
    INTL,
}

/// A registered user. Never serialized directly: `secret_key` must not reach
/// the wire, so responses go through [`PublicUser`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub secret_key: String,
    pub locale: Locale,
    pub days_lived: Option<String>,
    pub weekday: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret_key: secret_key.into(),
            locale: Locale::default(),
            days_lived: None,
            weekday: None,
            last_updated: None,
        }
    }
}

/// The subset of a user record safe to return to any caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub locale: Locale,
    pub days_lived: Option<String>,
    pub weekday: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            locale: user.locale,
            days_lived: user.days_lived.clone(),
            weekday: user.weekday.clone(),
            last_updated: user.last_updated,
        }
    }
}

/// Partial update applied to an existing user. Absent fields leave the
/// record untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub secret_key: Option<String>,
    pub locale: Option<Locale>,
}

/// Per-user stats payload. Absent users and unset fields both degrade to the
/// same sentinel defaults, so the payload never reveals whether an id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub days_lived: String,
    pub weekday: String,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            days_lived: "0".to_string(),
            weekday: String::new(),
        }
    }
}

impl From<&User> for UserStats {
    fn from(user: &User) -> Self {
        Self {
            days_lived: user
                .days_lived
                .clone()
                .filter(|days| !days.is_empty())
                .unwrap_or_else(|| "0".to_string()),
            weekday: user.weekday.clone().unwrap_or_default(),
        }
    }
}
