//! Typed content records shared by more than one page.
//!
//! Every record derives `Default` and is read with `#[serde(default)]`, so a
//! field missing from the YAML source renders as an empty slot instead of
//! failing the build. Records that belong to a single page type live next to
//! that page in [`crate::pages`].

use std::fmt;
use std::ops::Deref;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// A scalar content value.
///
/// Strings, numbers and booleans keep their source spelling, so `year: 2010`
/// and `year: "2010"` read the same. Null reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl TryFrom<Value> for Text {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Text::default()),
            Value::Bool(b) => Ok(Text(b.to_string())),
            Value::Number(n) => Ok(Text(n.to_string())),
            Value::String(s) => Ok(Text(s)),
            other => Err(format!("expected a scalar value, found {other:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Text::try_from(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// Returns the value of an optional field when it is present and non-empty.
pub fn present(value: &Option<Text>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Reads a yes/no field by truthiness: null, `false`, `0` and `""` are off,
/// any other value is on.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Ordered `platform -> url` pairs, kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfiles(Vec<(String, Text)>);

impl SocialProfiles {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Text)> {
        self.0.iter().map(|(platform, url)| (platform.as_str(), url))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SocialProfiles {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(platform, url)| (platform.to_string(), Text::from(url)))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for SocialProfiles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_yaml's Mapping preserves insertion order
        let Some(mapping) = Option::<serde_yaml::Mapping>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };

        let mut profiles = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let platform = Text::try_from(key).map_err(D::Error::custom)?;
            let url = Text::try_from(value).map_err(D::Error::custom)?;
            profiles.push((platform.0, url));
        }
        Ok(Self(profiles))
    }
}

/// `site.yaml`: the record every page reads.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SiteData {
    pub site: SiteInfo,
    pub nav: Vec<NavLink>,
    pub footer: Footer,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SiteInfo {
    pub name: Text,
    pub tagline: Text,
    pub description: Text,
    pub url: Text,
    pub email: Text,
    pub phone: Text,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct NavLink {
    pub url: Text,
    pub text: Text,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Footer {
    pub description: Text,
    pub social: Vec<SocialLink>,
    pub locations: Vec<Location>,
    pub legal: Text,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SocialLink {
    pub platform: Text,
    pub url: Text,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Location {
    pub name: Text,
    pub address: Text,
}

/// The `page:` section of a page record.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PageMeta {
    pub title: Text,
    pub description: Text,
}

/// The `hero:` section of a page record.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Hero {
    pub headline: Text,
    pub subheadline: Text,
    pub description: Text,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Link {
    pub text: Text,
    pub url: Text,
}

/// A titled block of text.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Card {
    pub title: Text,
    pub description: Text,
}

/// A titled block of text with a Font Awesome icon class.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IconCard {
    pub icon: Text,
    pub title: Text,
    pub description: Text,
}

/// A filter button on listing pages.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Category {
    pub id: Text,
    pub icon: Text,
    pub name: Text,
}

/// An `<option>` in a directory filter.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct FilterOption {
    pub id: Text,
    pub name: Text,
}
