//! Directory search and filtering
//!
//! The directory narrows the profile list by free-text search, category and
//! hourly-rate bracket. Filtering is stable: matches keep their original
//! relative order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::profiles::{Profile, ProfileSummary};

/// Selector value that disables a criterion.
pub const ALL: &str = "All";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Unknown price range: {0}")]
    UnknownPriceBracket(String),
}

/// Hourly-rate bands. Together they cover every non-negative rate exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBracket {
    #[serde(rename = "$0-50")]
    UpTo50,
    #[serde(rename = "$51-100")]
    UpTo100,
    #[serde(rename = "$101-200")]
    UpTo200,
    #[serde(rename = "$200+")]
    Over200,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 4] = [Self::UpTo50, Self::UpTo100, Self::UpTo200, Self::Over200];

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo50 => "$0-50",
            Self::UpTo100 => "$51-100",
            Self::UpTo200 => "$101-200",
            Self::Over200 => "$200+",
        }
    }

    /// The single bracket a rate falls into. Upper bounds are inclusive.
    pub fn for_rate(rate: Decimal) -> Self {
        if rate <= Decimal::from(50) {
            Self::UpTo50
        } else if rate <= Decimal::from(100) {
            Self::UpTo100
        } else if rate <= Decimal::from(200) {
            Self::UpTo200
        } else {
            Self::Over200
        }
    }

    pub fn contains(self, rate: Decimal) -> bool {
        Self::for_rate(rate) == self
    }
}

impl FromStr for PriceBracket {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.label() == s)
            .ok_or_else(|| DirectoryError::UnknownPriceBracket(s.to_string()))
    }
}

/// Raw query string for `GET /profiles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// Parsed criteria. `None` means the criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    search: Option<String>,
    category: Option<String>,
    price: Option<PriceBracket>,
}

/// Empty input and the `All` sentinel both unset a selector.
fn selector(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty() && *s != ALL)
}

impl DirectoryFilter {
    pub fn new(
        search: Option<&str>,
        category: Option<&str>,
        price: Option<PriceBracket>,
    ) -> Self {
        Self {
            search: search
                .filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase()),
            category: selector(category).map(str::to_string),
            price,
        }
    }

    pub fn from_query(query: &DirectoryQuery) -> Result<Self, DirectoryError> {
        let price = selector(query.price.as_deref())
            .map(PriceBracket::from_str)
            .transpose()?;

        Ok(Self::new(
            query.search.as_deref(),
            query.category.as_deref(),
            price,
        ))
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    fn matches_search(&self, profile: &Profile) -> bool {
        match &self.search {
            None => true,
            Some(needle) => {
                profile.name.to_lowercase().contains(needle.as_str())
                    || profile.category.to_lowercase().contains(needle.as_str())
            }
        }
    }

    fn matches_category(&self, profile: &Profile) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| profile.category == category)
    }

    fn matches_price(&self, profile: &Profile) -> bool {
        self.price
            .map_or(true, |bracket| bracket.contains(profile.hourly_rate))
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.matches_search(profile) && self.matches_category(profile) && self.matches_price(profile)
    }

    pub fn apply<'a>(&self, profiles: &'a [Profile]) -> Vec<&'a Profile> {
        profiles.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Directory page: the filtered cards plus an explicit empty state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView {
    pub profiles: Vec<ProfileSummary>,
    pub total: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl DirectoryView {
    pub fn new(matches: Vec<&Profile>) -> Self {
        let profiles: Vec<ProfileSummary> = matches.into_iter().map(ProfileSummary::from).collect();
        let empty = profiles.is_empty();
        Self {
            total: profiles.len(),
            empty,
            empty_message: empty.then_some("No influencers found. Try adjusting your search criteria."),
            profiles,
        }
    }
}

/// Options for the category and price selectors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub price_ranges: Vec<&'static str>,
}

impl FilterOptions {
    /// `All` first, then each distinct category in dataset order.
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let mut categories = vec![ALL.to_string()];
        for profile in profiles {
            if !categories.contains(&profile.category) {
                categories.push(profile.category.clone());
            }
        }

        let mut price_ranges = vec![ALL];
        price_ranges.extend(PriceBracket::ALL.iter().map(|b| b.label()));

        Self {
            categories,
            price_ranges,
        }
    }
}
