use crate::common::error::AppError;
use crate::entities::drafts::{DraftRecord, EditorMode, EditorSession};
use crate::models::badges::{BadgeDraft, BadgeRule};
use serde::Serialize;

impl TryFrom<DraftRecord> for BadgeDraft {
    type Error = AppError;

    fn try_from(record: DraftRecord) -> Result<Self, Self::Error> {
        let rule = BadgeRule::try_from(record.rule.as_str())?;
        Ok(Self {
            name: record.name,
            description: record.description,
            image: record.image,
            rule,
        })
    }
}

/// What the editor dialog is currently showing.
#[derive(Debug, Clone, Serialize)]
pub struct EditorView {
    /// Id of the badge being edited, `None` while creating a new one.
    pub editing: Option<i32>,
    pub draft: BadgeDraft,
}

impl TryFrom<EditorSession> for EditorView {
    type Error = AppError;

    fn try_from(session: EditorSession) -> Result<Self, Self::Error> {
        let editing = match session.mode {
            EditorMode::Create => None,
            EditorMode::Edit(badge_id) => Some(badge_id),
        };
        Ok(Self {
            editing,
            draft: BadgeDraft::try_from(session.draft)?,
        })
    }
}
