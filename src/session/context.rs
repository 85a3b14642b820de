use anyhow::{Context, Result};

use crate::domain::profiles::User;
use crate::services::DataProvider;

/// Who is using the app. Fixed at start and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Resolve the configured user id against the dataset.
    pub fn for_user(provider: &dyn DataProvider, user_id: &str) -> Result<Self> {
        let user = provider
            .get_user(user_id)
            .with_context(|| format!("CURRENT_USER_ID {user_id:?} does not match any user"))?;
        Ok(Self::new(user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
