// Member and collector endpoints
//
// `/collectors` is the admin view over all members; `/members/*` is the
// signed-in member's own profile.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    DashboardStats, Member, MemberProfile, MessageResponse, PasswordChange, ProfileUpdate,
};

impl ApiClient {
    /// List every member. Admin only.
    ///
    /// `GET /collectors`
    pub async fn list_members(&self) -> Result<Vec<Member>, Error> {
        let url = self.endpoint("collectors")?;
        debug!("listing members");
        self.get(url).await
    }

    /// Aggregate dashboard counters. Admin only.
    ///
    /// `GET /collectors/stats`
    pub async fn get_stats(&self) -> Result<DashboardStats, Error> {
        let url = self.endpoint("collectors/stats")?;
        debug!("fetching dashboard stats");
        self.get(url).await
    }

    /// `GET /members/profile`
    pub async fn get_profile(&self) -> Result<MemberProfile, Error> {
        let url = self.endpoint("members/profile")?;
        self.get(url).await
    }

    /// `PUT /members/profile`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<MemberProfile, Error> {
        let url = self.endpoint("members/profile")?;
        debug!(?update, "updating profile");
        self.put(url, update).await
    }

    /// `PUT /members/password`
    pub async fn change_password(&self, change: &PasswordChange) -> Result<MessageResponse, Error> {
        let url = self.endpoint("members/password")?;
        debug!("changing password");
        self.put(url, change).await
    }
}
