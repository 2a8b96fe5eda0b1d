use crate::common::context::Context;
use crate::entities::members::MemberRecord;
use tokio::sync::RwLock;

/// In-memory member roster. The member list itself is fixed for the
/// session; only badge assignments change.
#[derive(Debug, Default)]
pub struct RosterStore {
    inner: RwLock<Vec<MemberRecord>>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<MemberRecord>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> Vec<MemberRecord> {
    ctx.roster().inner.read().await.clone()
}

pub async fn fetch_one<C: Context>(ctx: &C, member_id: i64) -> Option<MemberRecord> {
    let roster = ctx.roster().inner.read().await;
    roster.iter().find(|record| record.id == member_id).cloned()
}

/// Flips possession of `badge_id` for one member. Returns the updated
/// record and whether the badge is now held, or `None` for an unknown
/// member.
pub async fn toggle_badge<C: Context>(
    ctx: &C,
    member_id: i64,
    badge_id: i32,
) -> Option<(MemberRecord, bool)> {
    let mut roster = ctx.roster().inner.write().await;
    let record = roster.iter_mut().find(|record| record.id == member_id)?;
    let assigned = record.toggle_badge(badge_id);
    Some((record.clone(), assigned))
}

/// Number of members currently holding `badge_id`. Counts raw badge
/// sets, so ids of deleted badges still contribute.
pub async fn count_holders<C: Context>(ctx: &C, badge_id: i32) -> usize {
    let roster = ctx.roster().inner.read().await;
    roster.iter().filter(|record| record.holds(badge_id)).count()
}
