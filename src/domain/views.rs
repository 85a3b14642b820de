//! Client-side view addresses.
//!
//! These are the routes the web client navigates between. The API hands them
//! out as links (recovery links, "book again" links) rather than hard-coding
//! paths in each handler.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Directory,
    Profile(String),
    Feed,
    MyCalls,
}

impl View {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Directory => "/influencers".to_string(),
            Self::Profile(id) => format!("/influencers/{id}"),
            Self::Feed => "/feed".to_string(),
            Self::MyCalls => "/my-calls".to_string(),
        }
    }
}
