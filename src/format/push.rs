//! `push` messages.

use super::{Message, repository_base};
use crate::{
    base::icons,
    event::payloads::{Commit, PushPayload},
};

/// Layout of the commit timestamp, rendered in the commit's own offset.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Pushes without commits (branch deletion, tag creation) are not relayed.
pub fn push(payload: &PushPayload) -> Option<Message> {
    if payload.commits.is_empty() {
        return None;
    }

    let count = payload.commits.len();
    let noun = if count == 1 { "commit" } else { "commits" };

    let title = format!("{} {} new {} to {}", repository_base(&payload.repository), count, noun, payload.git_ref);

    let body = payload.commits.iter().map(commit_line).collect::<Vec<_>>().join("\n");

    Some(Message::new(icons::PUSHED, title).with_body(body))
}

fn commit_line(commit: &Commit) -> String {
    let short = commit.id.get(..6).unwrap_or(&commit.id);
    let summary = commit.message.lines().next().unwrap_or_default();

    format!(
        ":0x{short}: [`{short}`]({}) : {} - `{}` @ {}",
        commit.url,
        summary,
        commit.author.name,
        commit.timestamp.format(TIMESTAMP_FORMAT)
    )
}

// Tests.
