//! Detail lists appended below a message title.
//!
//! Each helper returns `None` for an empty list so callers can decide between
//! omitting the line and showing [`or_none`].

use crate::event::payloads::{Label, Team, User};

/// `` `a`, `b` ``
pub fn assignees(users: &[User]) -> Option<String> {
    join(users.iter().map(|user| format!("`{}`", user.login)))
}

/// `` :0x<color>: `<name>` `` for each label, so traQ renders a colour swatch.
pub fn labels(labels: &[Label]) -> Option<String> {
    join(labels.iter().map(|label| format!(":0x{}: `{}`", label.color, label.name)))
}

/// Requested users, then requested teams.
pub fn reviewers(users: &[User], teams: &[Team]) -> Option<String> {
    let users = users.iter().map(|user| format!("`{}`", user.login));
    let teams = teams.iter().map(|team| format!("`{}`", team.name));

    join(users.chain(teams))
}

pub fn or_none(list: Option<String>) -> String {
    list.unwrap_or_else(|| "none".to_string())
}

fn join(items: impl Iterator<Item = String>) -> Option<String> {
    let items: Vec<String> = items.collect();

    if items.is_empty() { None } else { Some(items.join(", ")) }
}
