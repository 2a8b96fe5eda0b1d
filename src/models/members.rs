use crate::entities::members::MemberRecord;
use hashbrown::HashSet;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Ids of the badges this member holds. May reference badges that
    /// have since been deleted from the catalog.
    pub badges: HashSet<i32>,
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            badges: record.badges,
        }
    }
}
