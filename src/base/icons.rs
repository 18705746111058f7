//! traQ stamp names used as the leading icon of each message.

pub const ISSUE_OPENED: &str = "git_issue_opened";
pub const ISSUE_CLOSED: &str = "git_issue_closed";
pub const PULL_REQUEST_OPENED: &str = "git_pull_request";
pub const PULL_REQUEST_CLOSED: &str = "git_pull_request_closed";
pub const PULL_REQUEST_APPROVED: &str = "white_check_mark";
pub const PULL_REQUEST_MERGED: &str = "git_merged";
pub const PUSHED: &str = "git_push_repo";
pub const ASSIGNMENT: &str = "bust_in_silhouette";
pub const EDIT: &str = "pencil";
pub const RETRIEVED: &str = "leftwards_arrow_with_hook";
pub const TAG: &str = "git_tag";
pub const MILESTONE: &str = "git_milestone";
pub const LOCK: &str = "lock";
pub const UNLOCK: &str = "unlock";
pub const TRANSFER: &str = "arrow_right";
pub const PIN: &str = "pushpin";
pub const COMMENT: &str = "comment";
