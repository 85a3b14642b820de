//! Landing page view model

use serde::Serialize;

use super::profiles::{Profile, ProfileSummary};
use super::views::View;

pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct HomeStat {
    pub value: &'static str,
    pub label: &'static str,
}

const STATS: [HomeStat; 3] = [
    HomeStat {
        value: "10K+",
        label: "Happy Users",
    },
    HomeStat {
        value: "500+",
        label: "Verified Influencers",
    },
    HomeStat {
        value: "4.9",
        label: "Average Rating",
    },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub featured: Vec<ProfileSummary>,
    pub stats: Vec<HomeStat>,
    pub browse_link: String,
    pub feed_link: String,
}

impl HomeView {
    /// Features the first profiles in provider order.
    pub fn new(profiles: &[Profile]) -> Self {
        Self {
            featured: profiles
                .iter()
                .take(FEATURED_COUNT)
                .map(ProfileSummary::from)
                .collect(),
            stats: STATS.to_vec(),
            browse_link: View::Directory.path(),
            feed_link: View::Feed.path(),
        }
    }
}
