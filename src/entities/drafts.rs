use crate::entities::badges::BadgeRecord;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i32),
}

#[derive(Debug, Clone)]
pub struct DraftRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub rule: String,
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            rule: "TestDate1Year".to_owned(),
        }
    }
}

impl From<BadgeRecord> for DraftRecord {
    fn from(record: BadgeRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            image: record.image,
            rule: record.rule,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub mode: EditorMode,
    pub draft: DraftRecord,
    // Token of the most recently started image attach; completions
    // carrying any other token must not touch the draft.
    pub image_token: Option<Uuid>,
}

impl EditorSession {
    pub fn new(mode: EditorMode, draft: DraftRecord) -> Self {
        Self {
            mode,
            draft,
            image_token: None,
        }
    }
}
