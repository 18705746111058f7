//! Turns parsed GitHub events into traQ messages.
//!
//! Every event type has a dispatch on its action that picks an icon and a
//! title, then optionally appends detail lines (assignees, labels, reviewers)
//! and a body (issue text, comment text, commit list). Actions that are not
//! worth a notification produce no message at all.
//!
//! Rendered layout:
//!
//! ```text
//! ### :<icon>: <title>
//! <detail>
//!
//! ---
//! <body>
//! ```

pub mod details;
pub mod issues;
pub mod pull_request;
pub mod push;

use crate::event::{
    GithubEvent,
    payloads::{Repository, User},
};

// Structs.

/// A formatted notification, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    icon: &'static str,
    title: String,
    details: Vec<String>,
    body: Option<String>,
}

impl Message {
    pub fn new(icon: &'static str, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            details: Vec::new(),
            body: None,
        }
    }

    /// Appends a `<name>: <value>` line.
    pub fn with_detail(mut self, name: &str, value: impl AsRef<str>) -> Self {
        self.details.push(format!("{}: {}", name, value.as_ref()));
        self
    }

    /// Appends a `<name>: <value>` line only when there is a value.
    pub fn with_optional_detail(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.with_detail(name, value),
            None => self,
        }
    }

    /// Sets the body shown below the separator; blank bodies are dropped.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.trim().is_empty() { None } else { Some(body) };
        self
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Renders the message as traQ markdown.
    pub fn render(&self) -> String {
        let mut out = format!("### :{}: {}\n", self.icon, self.title);

        for detail in &self.details {
            out.push_str(detail);
            out.push('\n');
        }

        if let Some(body) = &self.body {
            out.push_str("\n---\n");
            out.push_str(body);
        }

        out
    }
}

// Dispatch.

/// Builds the message for an event, or `None` when the action is not relayed.
pub fn message_for(event: &GithubEvent) -> Option<Message> {
    match event {
        GithubEvent::Ping(_) => None,
        GithubEvent::Issues(payload) => issues::issues(payload),
        GithubEvent::IssueComment(payload) => issues::issue_comment(payload),
        GithubEvent::Push(payload) => push::push(payload),
        GithubEvent::PullRequest(payload) => pull_request::pull_request(payload),
        GithubEvent::PullRequestReview(payload) => pull_request::review(payload),
        GithubEvent::PullRequestReviewComment(payload) => pull_request::review_comment(payload),
    }
}

/// Formats an event into the text posted to traQ.
pub fn format_event(event: &GithubEvent) -> Option<String> {
    message_for(event).map(|message| message.render())
}

// Helpers.

/// `[[<name>](<url>)]`, the repository prefix of every title.
pub fn repository_base(repository: &Repository) -> String {
    format!("[[{}]({})]", repository.name, repository.html_url)
}

/// A user login in backticks.
pub fn actor(user: &User) -> String {
    format!("`{}`", user.login)
}

/// `review_requested` -> `review requested`.
pub fn humanize(action: &str) -> String {
    action.replace('_', " ")
}

// Tests.
