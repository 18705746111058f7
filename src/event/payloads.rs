//! Typed GitHub webhook payloads.
//!
//! Only the fields read by the formatter are modelled; everything else in the
//! delivery is ignored. Nullable text fields collapse to the empty string and
//! missing lists to empty vectors.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

// Shared objects.

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
}

/// Marker present on issues that are actually pull requests.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestLink {
    #[serde(default)]
    pub html_url: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub body: String,
    pub user: User,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub pull_request: Option<PullRequestLink>,
}

impl Issue {
    /// Whether this issue is the issue half of a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Branch {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub body: String,
    pub user: User,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub requested_reviewers: Vec<User>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub requested_teams: Vec<Team>,
    pub head: Branch,
    pub base: Branch,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub html_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub body: String,
    pub user: User,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReviewComment {
    pub html_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub body: String,
    pub path: String,
    pub user: User,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub html_url: String,
    /// `approved`, `changes_requested`, `commented` or `dismissed`.
    pub state: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub body: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub url: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Pusher {
    pub name: String,
}

// Event payloads.

/// Sent when a hook is created; nothing in it is relayed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PingPayload {}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IssuesPayload {
    pub action: String,
    pub issue: Issue,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IssueCommentPayload {
    pub action: String,
    pub issue: Issue,
    pub comment: Comment,
    pub repository: Repository,
    pub sender: User,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub compare: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub forced: bool,
    pub repository: Repository,
    pub pusher: Pusher,
    pub sender: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestPayload {
    pub action: String,
    pub number: u64,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestReviewPayload {
    pub action: String,
    pub review: Review,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestReviewCommentPayload {
    pub action: String,
    pub comment: ReviewComment,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}
