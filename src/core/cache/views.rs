//! Derived views over the cached collections
//!
//! Views borrow from the cache and never modify it.

use super::filter::{self, FilterState};
use crate::core::entities::{Department, Role, Team, User};

/// Filtered subsets of the four collections
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredViews<'a> {
    pub departments: Vec<&'a Department>,
    pub teams: Vec<&'a Team>,
    pub roles: Vec<&'a Role>,
    pub users: Vec<&'a User>,
}

impl FilteredViews<'_> {
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
            && self.teams.is_empty()
            && self.roles.is_empty()
            && self.users.is_empty()
    }
}

/// Compose selection and search filters into the four views
///
/// Department selection narrows teams and team selection narrows users;
/// the search term narrows every collection on top of that.
pub fn compute<'a>(
    departments: &'a [Department],
    teams: &'a [Team],
    roles: &'a [Role],
    users: &'a [User],
    state: &FilterState,
) -> FilteredViews<'a> {
    let term = state.search();

    FilteredViews {
        departments: departments
            .iter()
            .filter(|d| filter::department_matches(d, term))
            .collect(),
        teams: teams
            .iter()
            .filter(|t| filter::team_in_department(t, state.department))
            .filter(|t| filter::team_matches(t, term))
            .collect(),
        roles: roles
            .iter()
            .filter(|r| filter::role_matches(r, term))
            .collect(),
        users: users
            .iter()
            .filter(|u| filter::user_in_team(u, state.team))
            .filter(|u| filter::user_matches(u, term))
            .collect(),
    }
}

/// Users matching the department, team and role selections
///
/// The search term is not applied here.
pub fn assignments<'a>(users: &'a [User], state: &FilterState) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| filter::user_assigned_in_department(u, state.department))
        .filter(|u| filter::user_in_team(u, state.team))
        .filter(|u| filter::user_has_role(u, state.role))
        .collect()
}
