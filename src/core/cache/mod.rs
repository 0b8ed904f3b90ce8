//! Entity cache and filter engine
//!
//! The cache is loaded once from the admin API and is read-only afterwards.
//! Filtered views are recomputed from a [`FilterState`] on demand.

pub mod filter;
mod state;
pub mod views;

pub use filter::{FilterState, normalize_search, parse_selection};
pub use state::LoadState;
pub use views::FilteredViews;

use crate::core::client::AdminApi;
use crate::core::client::endpoints;
use crate::core::entities::{Department, EntityId, Role, Team, User, check_collection};
use crate::utils::error::Result;
use tracing::{error, info};

/// Read-only snapshot of departments, teams, roles and users
#[derive(Debug, Clone, Default)]
pub struct EntityCache {
    state: LoadState,
    departments: Vec<Department>,
    teams: Vec<Team>,
    roles: Vec<Role>,
    users: Vec<User>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ready cache from already fetched collections
    pub fn from_parts(
        departments: Vec<Department>,
        teams: Vec<Team>,
        roles: Vec<Role>,
        users: Vec<User>,
    ) -> Result<Self> {
        check_collection(endpoints::DEPARTMENTS, &departments)?;
        check_collection(endpoints::TEAMS, &teams)?;
        check_collection(endpoints::ROLES, &roles)?;
        check_collection(endpoints::USERS, &users)?;

        Ok(Self {
            state: LoadState::Ready,
            departments,
            teams,
            roles,
            users,
        })
    }

    /// Fetch all four collections, in order
    ///
    /// On any failure the cache ends up `LoadFailed` with empty collections
    /// and the error is returned for the caller to report.
    pub async fn load(&mut self, api: &dyn AdminApi) -> Result<()> {
        self.state = LoadState::Loading;
        info!("Loading entity collections");

        match Self::fetch_all(api).await {
            Ok(loaded) => {
                *self = loaded;
                info!(
                    "Loaded {} departments, {} teams, {} roles, {} users",
                    self.departments.len(),
                    self.teams.len(),
                    self.roles.len(),
                    self.users.len()
                );
                Ok(())
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                *self = Self {
                    state: LoadState::LoadFailed,
                    ..Self::default()
                };
                Err(e)
            }
        }
    }

    async fn fetch_all(api: &dyn AdminApi) -> Result<Self> {
        let departments = api.departments().await?;
        let teams = api.teams().await?;
        let roles = api.roles().await?;
        let users = api.users().await?;

        Ok(Self {
            state: LoadState::Ready,
            departments,
            teams,
            roles,
            users,
        })
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn role(&self, id: EntityId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Filtered views for the current state
    pub fn views(&self, state: &FilterState) -> FilteredViews<'_> {
        views::compute(
            &self.departments,
            &self.teams,
            &self.roles,
            &self.users,
            state,
        )
    }

    /// Users matching the selection axes only
    pub fn assignments(&self, state: &FilterState) -> Vec<&User> {
        views::assignments(&self.users, state)
    }

    /// Role currently selected, looked up in the full collection
    pub fn selected_role(&self, state: &FilterState) -> Option<&Role> {
        state.role.and_then(|id| self.role(id))
    }
}
