use crate::models::badges::{Badge, BadgeDraft};
use crate::models::members::Member;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Admin actions the presentation shell can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminRequest {
    CreateBadge {
        draft: BadgeDraft,
    },
    EditBadge {
        badge_id: i32,
        draft: BadgeDraft,
    },
    DeleteBadge {
        badge_id: i32,
    },
    ToggleAssignment {
        member_id: i64,
        badge_id: i32,
    },
    SelectImage {
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AdminResponse {
    Badge {
        badge: Badge,
    },
    BadgeDeleted {
        badge_id: i32,
    },
    Assignment {
        member: Member,
        assigned: bool,
    },
    /// `applied` is false when a later image selection superseded this one.
    ImageAttached {
        applied: bool,
    },
}
