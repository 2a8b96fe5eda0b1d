pub mod badges;
pub mod drafts;
pub mod members;
