//! Markup and option lists for the derived displays

use crate::core::entities::{Role, Team, User, UserRole};
use crate::ui::dom::SelectOption;
use crate::utils::html::escape;

pub const TEAM_PLACEHOLDER: &str = "Select Team";
pub const USER_PLACEHOLDER: &str = "Select User";
pub const NO_PERMISSIONS: &str = r#"<p class="text-muted">No permissions available</p>"#;
pub const NO_ROLES: &str = r#"<span class="text-muted">No roles assigned</span>"#;
pub const NO_ASSIGNMENTS: &str = r#"<p class="text-muted">No user assignments found</p>"#;

/// `name` or `name (department)`
pub fn team_label(team: &Team) -> String {
    match team.department_name() {
        Some(department) => format!("{} ({})", team.name, department),
        None => team.name.clone(),
    }
}

pub fn team_options(teams: &[&Team]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(TEAM_PLACEHOLDER))
        .chain(
            teams
                .iter()
                .map(|t| SelectOption::new(t.id.to_string(), team_label(t))),
        )
        .collect()
}

pub fn user_options(users: &[&User]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(USER_PLACEHOLDER))
        .chain(users.iter().map(|u| {
            SelectOption::new(u.id.to_string(), format!("{} ({})", u.full_name(), u.email))
        }))
        .collect()
}

/// Permission badges of the selected role
pub fn permission_badges(role: Option<&Role>) -> String {
    let Some(permissions) = role.and_then(|r| r.permissions.as_ref()) else {
        return NO_PERMISSIONS.to_string();
    };

    permissions
        .iter()
        .map(|p| {
            format!(
                r#"<span class="badge bg-primary me-2 mb-2"><i class="fas fa-shield-alt me-1"></i>{}</span>"#,
                escape(p)
            )
        })
        .collect()
}

/// `Role (Department) [Team]`, qualifiers only when present
pub fn role_badge_label(assignment: &UserRole) -> String {
    let mut label = assignment.role.name.clone();
    if let Some(department) = &assignment.department {
        label.push_str(&format!(" ({})", department.name));
    }
    if let Some(team) = &assignment.team {
        label.push_str(&format!(" [{}]", team.name));
    }
    label
}

pub fn role_badges(user: &User) -> String {
    let roles = user.roles();
    if roles.is_empty() {
        return NO_ROLES.to_string();
    }

    roles
        .iter()
        .map(|ur| {
            format!(
                r#"<span class="badge bg-secondary me-1">{}</span>"#,
                escape(&role_badge_label(ur))
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn assignment_card(user: &User) -> String {
    format!(
        concat!(
            r#"<div class="user-assignment-card" data-user-id="{id}">"#,
            r#"<div class="user-avatar">{initials}</div>"#,
            r#"<div class="user-info">"#,
            r#"<div class="user-name">{name}</div>"#,
            r#"<div class="user-details">{email} • {username}</div>"#,
            r#"<div class="user-roles">{roles}</div>"#,
            r#"</div>"#,
            r#"<div class="assignment-actions">"#,
            r#"<button class="btn btn-sm btn-outline-primary" data-action="editUserAssignment" data-id="{id}"><i class="fas fa-edit"></i></button>"#,
            r#"<button class="btn btn-sm btn-outline-danger" data-action="removeUserAssignment" data-id="{id}"><i class="fas fa-trash"></i></button>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        id = user.id,
        initials = escape(&user.initials()),
        name = escape(&user.full_name()),
        email = escape(&user.email),
        username = escape(&user.username),
        roles = role_badges(user),
    )
}

/// Cards for the assignment view
pub fn assignment_cards(users: &[&User]) -> String {
    if users.is_empty() {
        return NO_ASSIGNMENTS.to_string();
    }
    users.iter().map(|u| assignment_card(u)).collect()
}
