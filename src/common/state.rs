use crate::common::context::Context;
use crate::entities::badges::BadgeRecord;
use crate::entities::members::MemberRecord;
use crate::repositories::badges::CatalogStore;
use crate::repositories::drafts::EditorStore;
use crate::repositories::members::RosterStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub roster: Arc<RosterStore>,
    pub editor: Arc<EditorStore>,
}

impl AppState {
    pub fn empty() -> Self {
        Self {
            catalog: Arc::new(CatalogStore::new()),
            roster: Arc::new(RosterStore::new()),
            editor: Arc::new(EditorStore::new()),
        }
    }

    pub fn seeded(catalog: Vec<BadgeRecord>, roster: Vec<MemberRecord>) -> Self {
        Self {
            catalog: Arc::new(CatalogStore::seeded(catalog)),
            roster: Arc::new(RosterStore::seeded(roster)),
            editor: Arc::new(EditorStore::new()),
        }
    }
}

impl Context for AppState {
    fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    fn roster(&self) -> &RosterStore {
        &self.roster
    }

    fn editor(&self) -> &EditorStore {
        &self.editor
    }
}
