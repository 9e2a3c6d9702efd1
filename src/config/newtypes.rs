//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! [`VendConfig`](super::VendConfig) can only ever hold usable credentials.

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// A personal API access token.
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use vend_api::ApiToken;
///
/// let token = ApiToken::new("secret-token").unwrap();
/// assert_eq!(token.as_ref(), "secret-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated store domain prefix (the `xxxx` in `xxxx.vendhq.com`).
///
/// Anything after the first `.` is dropped, so `mystore.vendhq.com` and
/// `mystore` name the same store.
///
/// # Example
///
/// ```rust
/// use vend_api::DomainPrefix;
///
/// let prefix = DomainPrefix::new("MyStore.vendhq.com").unwrap();
/// assert_eq!(prefix.as_ref(), "mystore");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DomainPrefix(String);

impl DomainPrefix {
    /// Creates a new domain prefix, normalizing full host names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomainPrefix`] if the prefix is empty or
    /// contains characters other than ASCII letters, digits and hyphens.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = prefix.into();
        let trimmed = raw.trim();
        let trimmed = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let name = trimmed.split('.').next().unwrap_or_default().to_lowercase();

        if !Self::is_valid(&name) {
            return Err(ConfigError::InvalidDomainPrefix { prefix: raw });
        }
        Ok(Self(name))
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for DomainPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DomainPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DomainPrefix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The timezone a store reports its timestamps in.
///
/// Accepts `Local` (the machine's zone, the default), `UTC`/`Z`, a fixed
/// offset such as `+10:00` or `-0530`, or a zoneinfo name such as
/// `Pacific/Auckland`. Named zones follow daylight saving per instant.
///
/// # Example
///
/// ```rust
/// use vend_api::StoreTimeZone;
///
/// let tz: StoreTimeZone = "+12:00".parse().unwrap();
/// assert_eq!(tz.to_string(), "+12:00");
///
/// let named: StoreTimeZone = "Pacific/Auckland".parse().unwrap();
/// assert_eq!(named.to_string(), "Pacific/Auckland");
/// assert_eq!(StoreTimeZone::default(), StoreTimeZone::Local);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreTimeZone {
    /// The timezone of the machine running the client.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
    /// A zone from the IANA timezone database.
    Named(Tz),
}

impl StoreTimeZone {
    fn parse_offset(label: &str) -> Option<FixedOffset> {
        let (sign, rest) = match label.as_bytes().first()? {
            b'+' => (1, &label[1..]),
            b'-' => (-1, &label[1..]),
            _ => return None,
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => (rest.get(..2)?, rest.get(2..)?),
            None => (rest, "0"),
        };
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

impl FromStr for StoreTimeZone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("local") || label.is_empty() {
            return Ok(Self::Local);
        }
        if label.eq_ignore_ascii_case("utc") || label.eq_ignore_ascii_case("z") {
            return Ok(Self::Utc);
        }
        Self::parse_offset(label)
            .map(Self::Fixed)
            .or_else(|| label.parse::<Tz>().ok().map(Self::Named))
            .ok_or_else(|| ConfigError::InvalidTimeZone {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for StoreTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("Local"),
            Self::Utc => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// A validated host URL used in place of `https://{prefix}.vendhq.com`.
///
/// Useful behind a proxy, or to point the client at a local mock server.
/// Trailing slashes are removed.
///
/// # Example
///
/// ```rust
/// use vend_api::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let Some((scheme, rest)) = trimmed.split_once("://") else {
            return Err(ConfigError::InvalidHostUrl { url });
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) || host.is_empty()
        {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
