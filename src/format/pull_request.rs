//! `pull_request`, `pull_request_review` and `pull_request_review_comment` messages.

use super::{Message, actor, details, humanize, repository_base};
use crate::{
    base::icons,
    event::payloads::{PullRequest, PullRequestPayload, PullRequestReviewCommentPayload, PullRequestReviewPayload},
};

pub fn pull_request(payload: &PullRequestPayload) -> Option<Message> {
    let pr = &payload.pull_request;

    // A closed pull request with `merged` set was merged, not closed.
    let (action, icon) = match payload.action.as_str() {
        "closed" if pr.merged => ("merged", icons::PULL_REQUEST_MERGED),
        "closed" => ("closed", icons::PULL_REQUEST_CLOSED),
        action @ ("opened" | "reopened" | "ready_for_review") => (action, icons::PULL_REQUEST_OPENED),
        action @ "edited" => (action, icons::EDIT),
        action @ ("converted_to_draft" | "review_request_removed") => (action, icons::RETRIEVED),
        action @ ("assigned" | "unassigned" | "review_requested") => (action, icons::ASSIGNMENT),
        action @ ("labeled" | "unlabeled") => (action, icons::TAG),
        action @ ("milestoned" | "demilestoned") => (action, icons::MILESTONE),
        action @ "locked" => (action, icons::LOCK),
        action @ "unlocked" => (action, icons::UNLOCK),
        _ => return None,
    };

    let title = format!(
        "{} Pull Request {} by {}: [{}]({})",
        repository_base(&payload.repository),
        humanize(action),
        actor(&payload.sender),
        pr.title,
        pr.html_url
    );

    let message = Message::new(icon, title);

    let message = match action {
        "opened" => message
            .with_optional_detail("Assignees", details::assignees(&pr.assignees))
            .with_optional_detail("Labels", details::labels(&pr.labels))
            .with_optional_detail("Reviewers", reviewers(pr))
            .with_body(pr.body.as_str()),
        "assigned" | "unassigned" => message.with_detail("Assignees", details::or_none(details::assignees(&pr.assignees))),
        "labeled" | "unlabeled" => message.with_detail("Labels", details::or_none(details::labels(&pr.labels))),
        "review_requested" | "review_request_removed" => message.with_detail("Reviewers", details::or_none(reviewers(pr))),
        _ => message,
    };

    Some(message)
}

/// Reviews without a verdict or text (the container GitHub creates for a batch
/// of line comments) are dropped; the line comments arrive on their own.
pub fn review(payload: &PullRequestReviewPayload) -> Option<Message> {
    let review = &payload.review;
    let pr = &payload.pull_request;
    let state = review.state.to_ascii_lowercase();

    let (verb, icon) = match (payload.action.as_str(), state.as_str()) {
        ("submitted", "approved") => ("approved", icons::PULL_REQUEST_APPROVED),
        ("submitted", "changes_requested") => ("changes requested", icons::COMMENT),
        ("submitted", "commented") if review.body.trim().is_empty() => return None,
        ("submitted", "commented") => ("commented", icons::COMMENT),
        ("dismissed", _) => ("dismissed", icons::RETRIEVED),
        _ => return None,
    };

    let title = format!(
        "{} [Review]({}) {} by {} on Pull Request [{}]({})",
        repository_base(&payload.repository),
        review.html_url,
        verb,
        actor(&payload.sender),
        pr.title,
        pr.html_url
    );

    Some(Message::new(icon, title).with_body(review.body.as_str()))
}

pub fn review_comment(payload: &PullRequestReviewCommentPayload) -> Option<Message> {
    let comment = &payload.comment;
    let pr = &payload.pull_request;
    let action = payload.action.as_str();

    let icon = match action {
        "created" => icons::COMMENT,
        "edited" => icons::EDIT,
        _ => return None,
    };

    let title = format!(
        "{} [Comment]({}) {} by {} on Pull Request [{}]({})",
        repository_base(&payload.repository),
        comment.html_url,
        action,
        actor(&payload.sender),
        pr.title,
        pr.html_url
    );

    Some(Message::new(icon, title).with_detail("File", format!("`{}`", comment.path)).with_body(comment.body.as_str()))
}

fn reviewers(pr: &PullRequest) -> Option<String> {
    details::reviewers(&pr.requested_reviewers, &pr.requested_teams)
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        event::{EventKind, GithubEvent},
        format::format_event,
    };

    const PULL_REQUEST_OPENED: &str = include_str!("../../tests/fixtures/pull_request_opened.json");
    const REVIEW_SUBMITTED: &str = include_str!("../../tests/fixtures/pull_request_review_submitted.json");
    const REVIEW_COMMENT_CREATED: &str = include_str!("../../tests/fixtures/pull_request_review_comment_created.json");

    fn pull_request_with(action: &str) -> PullRequestPayload {
        let mut value: serde_json::Value = serde_json::from_str(PULL_REQUEST_OPENED).unwrap();
        value["action"] = action.into();
        serde_json::from_value(value).unwrap()
    }

    fn review_with(action: &str, state: &str, body: &str) -> PullRequestReviewPayload {
        let mut value: serde_json::Value = serde_json::from_str(REVIEW_SUBMITTED).unwrap();
        value["action"] = action.into();
        value["review"]["state"] = state.into();
        value["review"]["body"] = body.into();
        serde_json::from_value(value).unwrap()
    }

    fn review_comment_with(action: &str) -> PullRequestReviewCommentPayload {
        let mut value: serde_json::Value = serde_json::from_str(REVIEW_COMMENT_CREATED).unwrap();
        value["action"] = action.into();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn opened_pull_request_has_details_and_body() {
        let event = GithubEvent::parse(EventKind::PullRequest, PULL_REQUEST_OPENED.as_bytes()).unwrap();

        assert_eq!(
            format_event(&event).unwrap(),
            "### :git_pull_request: [[github-relay](https://github.com/octo-org/github-relay)] Pull Request opened by `monalisa`: [Add review notifications](https://github.com/octo-org/github-relay/pull/43)\n\
             Assignees: `monalisa`\n\
             Labels: :0xa2eeef: `enhancement`\n\
             Reviewers: `octocat`, `maintainers`\n\
             \n---\n\
             Posts a message when a review is submitted."
        );
    }

    #[test]
    fn closed_and_merged_are_distinguished() {
        let closed = pull_request(&pull_request_with("closed")).unwrap();
        assert_eq!(closed.icon(), icons::PULL_REQUEST_CLOSED);
        assert!(closed.title().contains("Pull Request closed by"));

        let mut payload = pull_request_with("closed");
        payload.pull_request.merged = true;
        let merged = pull_request(&payload).unwrap();
        assert_eq!(merged.icon(), icons::PULL_REQUEST_MERGED);
        assert!(merged.title().contains("Pull Request merged by"));
        assert!(merged.body().is_none());
    }

    #[test]
    fn icon_table() {
        let cases = [
            ("reopened", icons::PULL_REQUEST_OPENED),
            ("ready_for_review", icons::PULL_REQUEST_OPENED),
            ("edited", icons::EDIT),
            ("converted_to_draft", icons::RETRIEVED),
            ("assigned", icons::ASSIGNMENT),
            ("unlabeled", icons::TAG),
            ("milestoned", icons::MILESTONE),
            ("locked", icons::LOCK),
            ("unlocked", icons::UNLOCK),
        ];

        for (action, icon) in cases {
            assert_eq!(pull_request(&pull_request_with(action)).unwrap().icon(), icon, "action {action}");
        }
    }

    #[test]
    fn review_request_lists_reviewers() {
        let message = pull_request(&pull_request_with("review_requested")).unwrap();
        assert!(message.title().contains("Pull Request review requested by"));
        assert_eq!(message.details(), ["Reviewers: `octocat`, `maintainers`"]);

        let mut payload = pull_request_with("review_request_removed");
        payload.pull_request.requested_reviewers.clear();
        payload.pull_request.requested_teams.clear();
        let message = pull_request(&payload).unwrap();
        assert_eq!(message.icon(), icons::RETRIEVED);
        assert_eq!(message.details(), ["Reviewers: none"]);
    }

    #[test]
    fn synchronize_is_dropped() {
        assert!(pull_request(&pull_request_with("synchronize")).is_none());
        assert!(pull_request(&pull_request_with("auto_merge_enabled")).is_none());
    }

    #[test]
    fn approved_review() {
        let event = GithubEvent::parse(EventKind::PullRequestReview, REVIEW_SUBMITTED.as_bytes()).unwrap();

        assert_eq!(
            format_event(&event).unwrap(),
            "### :white_check_mark: [[github-relay](https://github.com/octo-org/github-relay)] [Review](https://github.com/octo-org/github-relay/pull/43#pullrequestreview-88) approved by `octocat` on Pull Request [Add review notifications](https://github.com/octo-org/github-relay/pull/43)\n\
             \n---\n\
             Looks good to me."
        );
    }

    #[test]
    fn review_states() {
        let message = review(&review_with("submitted", "changes_requested", "Please split this up.")).unwrap();
        assert_eq!(message.icon(), icons::COMMENT);
        assert!(message.title().contains("changes requested by `octocat`"));

        let message = review(&review_with("submitted", "commented", "A few nits.")).unwrap();
        assert!(message.title().contains("commented by `octocat`"));

        let message = review(&review_with("dismissed", "dismissed", "")).unwrap();
        assert_eq!(message.icon(), icons::RETRIEVED);
        assert!(message.body().is_none());
    }

    #[test]
    fn empty_commented_review_is_dropped() {
        assert!(review(&review_with("submitted", "commented", "")).is_none());
        assert!(review(&review_with("edited", "approved", "Looks good to me.")).is_none());
    }

    #[test]
    fn review_comment_names_file() {
        let message = review_comment(&review_comment_with("created")).unwrap();

        assert_eq!(message.icon(), icons::COMMENT);
        assert_eq!(message.details(), ["File: `src/format/mod.rs`"]);
        assert_eq!(message.body(), Some("Could this use the shared helper?"));
        assert!(message.title().contains("created by `octocat` on Pull Request [Add review notifications]"));
    }

    #[test]
    fn review_comment_actions() {
        assert_eq!(review_comment(&review_comment_with("edited")).unwrap().icon(), icons::EDIT);
        assert!(review_comment(&review_comment_with("deleted")).is_none());
    }
}
