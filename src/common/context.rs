use crate::repositories::badges::CatalogStore;
use crate::repositories::drafts::EditorStore;
use crate::repositories::members::RosterStore;

pub trait Context: Sync + Send {
    fn catalog(&self) -> &CatalogStore;
    fn roster(&self) -> &RosterStore;
    fn editor(&self) -> &EditorStore;
}
