//! Parsing of inbound GitHub webhook deliveries.
//!
//! GitHub names the event in the `X-GitHub-Event` header; the body is the JSON
//! payload for that event. [`EventKind`] resolves the header, and
//! [`GithubEvent::parse`] turns the body into the matching typed payload.

pub mod payloads;

use std::{fmt, str::FromStr};

use payloads::{IssueCommentPayload, IssuesPayload, PingPayload, PullRequestPayload, PullRequestReviewCommentPayload, PullRequestReviewPayload, PushPayload};

use crate::base::types::{Err, Res};

// Kinds.

/// The GitHub events this relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ping,
    Issues,
    IssueComment,
    Push,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
}

impl EventKind {
    /// The header value GitHub uses for this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Ping => "ping",
            EventKind::Issues => "issues",
            EventKind::IssueComment => "issue_comment",
            EventKind::Push => "push",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestReview => "pull_request_review",
            EventKind::PullRequestReviewComment => "pull_request_review_comment",
        }
    }
}

impl FromStr for EventKind {
    type Err = Err;

    fn from_str(s: &str) -> Res<Self> {
        let kind = match s {
            "ping" => EventKind::Ping,
            "issues" => EventKind::Issues,
            "issue_comment" => EventKind::IssueComment,
            "push" => EventKind::Push,
            "pull_request" => EventKind::PullRequest,
            "pull_request_review" => EventKind::PullRequestReview,
            "pull_request_review_comment" => EventKind::PullRequestReviewComment,
            other => return Err(anyhow::anyhow!("Unsupported event: {}", other)),
        };

        Ok(kind)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Events.

/// A parsed GitHub webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GithubEvent {
    Ping(PingPayload),
    Issues(IssuesPayload),
    IssueComment(IssueCommentPayload),
    Push(PushPayload),
    PullRequest(PullRequestPayload),
    PullRequestReview(PullRequestReviewPayload),
    PullRequestReviewComment(PullRequestReviewCommentPayload),
}

impl GithubEvent {
    /// Deserializes `body` as the payload of `kind`.
    pub fn parse(kind: EventKind, body: &[u8]) -> Res<Self> {
        let event = match kind {
            EventKind::Ping => GithubEvent::Ping(serde_json::from_slice(body)?),
            EventKind::Issues => GithubEvent::Issues(serde_json::from_slice(body)?),
            EventKind::IssueComment => GithubEvent::IssueComment(serde_json::from_slice(body)?),
            EventKind::Push => GithubEvent::Push(serde_json::from_slice(body)?),
            EventKind::PullRequest => GithubEvent::PullRequest(serde_json::from_slice(body)?),
            EventKind::PullRequestReview => GithubEvent::PullRequestReview(serde_json::from_slice(body)?),
            EventKind::PullRequestReviewComment => GithubEvent::PullRequestReviewComment(serde_json::from_slice(body)?),
        };

        Ok(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            GithubEvent::Ping(_) => EventKind::Ping,
            GithubEvent::Issues(_) => EventKind::Issues,
            GithubEvent::IssueComment(_) => EventKind::IssueComment,
            GithubEvent::Push(_) => EventKind::Push,
            GithubEvent::PullRequest(_) => EventKind::PullRequest,
            GithubEvent::PullRequestReview(_) => EventKind::PullRequestReview,
            GithubEvent::PullRequestReviewComment(_) => EventKind::PullRequestReviewComment,
        }
    }

    /// The payload's `action`; events without one report their own name.
    pub fn action(&self) -> &str {
        match self {
            GithubEvent::Ping(_) => "ping",
            GithubEvent::Push(_) => "push",
            GithubEvent::Issues(p) => &p.action,
            GithubEvent::IssueComment(p) => &p.action,
            GithubEvent::PullRequest(p) => &p.action,
            GithubEvent::PullRequestReview(p) => &p.action,
            GithubEvent::PullRequestReviewComment(p) => &p.action,
        }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUES_OPENED: &str = include_str!("../../tests/fixtures/issues_opened.json");
    const PUSH: &str = include_str!("../../tests/fixtures/push.json");
    const PULL_REQUEST_OPENED: &str = include_str!("../../tests/fixtures/pull_request_opened.json");
    const ISSUE_COMMENT_CREATED: &str = include_str!("../../tests/fixtures/issue_comment_created.json");
    const PING: &str = include_str!("../../tests/fixtures/ping.json");

    #[test]
    fn kind_round_trips_through_header_value() {
        for kind in [
            EventKind::Ping,
            EventKind::Issues,
            EventKind::IssueComment,
            EventKind::Push,
            EventKind::PullRequest,
            EventKind::PullRequestReview,
            EventKind::PullRequestReviewComment,
        ] {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unsupported_kind_is_rejected() {
        let err = "workflow_run".parse::<EventKind>().unwrap_err();
        assert!(err.to_string().contains("workflow_run"));
    }

    #[test]
    fn parses_issues_payload() {
        let event = GithubEvent::parse(EventKind::Issues, ISSUES_OPENED.as_bytes()).unwrap();

        assert_eq!(event.kind(), EventKind::Issues);
        assert_eq!(event.action(), "opened");

        let GithubEvent::Issues(payload) = event else { panic!("wrong variant") };
        assert_eq!(payload.issue.number, 42);
        assert_eq!(payload.repository.name, "github-relay");
        assert_eq!(payload.issue.labels.len(), 2);
        assert!(!payload.issue.is_pull_request());
    }

    #[test]
    fn null_body_becomes_empty() {
        let mut value: serde_json::Value = serde_json::from_str(ISSUES_OPENED).unwrap();
        value["issue"]["body"] = serde_json::Value::Null;
        value["issue"]["assignees"] = serde_json::Value::Null;

        let event = GithubEvent::parse(EventKind::Issues, value.to_string().as_bytes()).unwrap();

        let GithubEvent::Issues(payload) = event else { panic!("wrong variant") };
        assert_eq!(payload.issue.body, "");
        assert!(payload.issue.assignees.is_empty());
    }

    #[test]
    fn push_reports_push_action() {
        let event = GithubEvent::parse(EventKind::Push, PUSH.as_bytes()).unwrap();

        assert_eq!(event.action(), "push");

        let GithubEvent::Push(payload) = event else { panic!("wrong variant") };
        assert_eq!(payload.git_ref, "refs/heads/main");
        assert_eq!(payload.commits.len(), 2);
    }

    #[test]
    fn issue_comment_on_pull_request_is_detected() {
        let mut value: serde_json::Value = serde_json::from_str(ISSUE_COMMENT_CREATED).unwrap();
        value["issue"]["pull_request"] = serde_json::json!({ "html_url": "https://github.com/octo-org/github-relay/pull/42" });

        let event = GithubEvent::parse(EventKind::IssueComment, value.to_string().as_bytes()).unwrap();

        let GithubEvent::IssueComment(payload) = event else { panic!("wrong variant") };
        assert!(payload.issue.is_pull_request());
    }

    #[test]
    fn ping_ignores_its_fields() {
        let event = GithubEvent::parse(EventKind::Ping, PING.as_bytes()).unwrap();

        assert_eq!(event, GithubEvent::Ping(PingPayload {}));
        assert_eq!(event.action(), "ping");
    }

    #[test]
    fn payload_of_wrong_kind_fails() {
        assert!(GithubEvent::parse(EventKind::Push, PULL_REQUEST_OPENED.as_bytes()).is_err());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(GithubEvent::parse(EventKind::Issues, b"{not json").is_err());
    }
}
