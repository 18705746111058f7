//! `issues` and `issue_comment` messages.

use super::{Message, actor, details, humanize, repository_base};
use crate::{
    base::icons,
    event::payloads::{IssueCommentPayload, IssuesPayload},
};

pub fn issues(payload: &IssuesPayload) -> Option<Message> {
    let issue = &payload.issue;
    let action = payload.action.as_str();

    let icon = match action {
        "opened" | "reopened" => icons::ISSUE_OPENED,
        "closed" | "deleted" => icons::ISSUE_CLOSED,
        "edited" => icons::EDIT,
        "assigned" | "unassigned" => icons::ASSIGNMENT,
        "labeled" | "unlabeled" => icons::TAG,
        "milestoned" | "demilestoned" => icons::MILESTONE,
        "locked" => icons::LOCK,
        "unlocked" => icons::UNLOCK,
        "transferred" => icons::TRANSFER,
        "pinned" | "unpinned" => icons::PIN,
        _ => return None,
    };

    let title = format!(
        "{} Issue {} by {}: [{}]({})",
        repository_base(&payload.repository),
        humanize(action),
        actor(&payload.sender),
        issue.title,
        issue.html_url
    );

    let message = Message::new(icon, title);

    let message = match action {
        "opened" => message
            .with_optional_detail("Assignees", details::assignees(&issue.assignees))
            .with_optional_detail("Labels", details::labels(&issue.labels))
            .with_body(issue.body.as_str()),
        "assigned" | "unassigned" => message.with_detail("Assignees", details::or_none(details::assignees(&issue.assignees))),
        "labeled" | "unlabeled" => message.with_detail("Labels", details::or_none(details::labels(&issue.labels))),
        _ => message,
    };

    Some(message)
}

pub fn issue_comment(payload: &IssueCommentPayload) -> Option<Message> {
    let issue = &payload.issue;
    let comment = &payload.comment;
    let action = payload.action.as_str();

    let icon = match action {
        "created" => icons::COMMENT,
        "edited" => icons::EDIT,
        _ => return None,
    };

    let target = if issue.is_pull_request() { "Pull Request" } else { "Issue" };

    let title = format!(
        "{} [Comment]({}) {} by {} on {} [{}]({})",
        repository_base(&payload.repository),
        comment.html_url,
        action,
        actor(&payload.sender),
        target,
        issue.title,
        issue.html_url
    );

    Some(Message::new(icon, title).with_body(comment.body.as_str()))
}

// Tests.
