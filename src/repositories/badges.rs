use crate::common::context::Context;
use crate::entities::badges::BadgeRecord;
use tokio::sync::RwLock;

/// In-memory badge catalog. Lives for one admin session.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    records: Vec<BadgeRecord>,
    next_id: i32,
}

impl Default for CatalogInner {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<BadgeRecord>) -> Self {
        let next_id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(CatalogInner { records, next_id }),
        }
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> Vec<BadgeRecord> {
    ctx.catalog().inner.read().await.records.clone()
}

pub async fn fetch_one<C: Context>(ctx: &C, badge_id: i32) -> Option<BadgeRecord> {
    let inner = ctx.catalog().inner.read().await;
    inner
        .records
        .iter()
        .find(|record| record.id == badge_id)
        .cloned()
}

pub async fn create<C: Context>(
    ctx: &C,
    name: &str,
    description: &str,
    image: &str,
    rule: &str,
) -> BadgeRecord {
    let mut inner = ctx.catalog().inner.write().await;
    // Monotonic within the session, so deleted ids are never handed out
    // again.
    let id = inner.next_id;
    inner.next_id += 1;
    let record = BadgeRecord {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        rule: rule.to_owned(),
    };
    inner.records.push(record.clone());
    record
}

pub async fn update<C: Context>(
    ctx: &C,
    badge_id: i32,
    name: &str,
    description: &str,
    image: &str,
    rule: &str,
) -> Option<BadgeRecord> {
    let mut inner = ctx.catalog().inner.write().await;
    let record = inner
        .records
        .iter_mut()
        .find(|record| record.id == badge_id)?;
    record.name = name.to_owned();
    record.description = description.to_owned();
    record.image = image.to_owned();
    record.rule = rule.to_owned();
    Some(record.clone())
}

pub async fn delete<C: Context>(ctx: &C, badge_id: i32) -> bool {
    let mut inner = ctx.catalog().inner.write().await;
    let before = inner.records.len();
    inner.records.retain(|record| record.id != badge_id);
    inner.records.len() != before
}
