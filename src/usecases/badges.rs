use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::badges::{Badge, BadgeDraft, BadgeWithHolders, CatalogOverview};
use crate::models::members::Member;
use crate::repositories::badges;
use crate::repositories::members;
use tracing::info;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Badge>> {
    badges::fetch_all(ctx)
        .await
        .into_iter()
        .map(Badge::try_from)
        .collect()
}

pub async fn fetch_one<C: Context>(ctx: &C, badge_id: i32) -> ServiceResult<Badge> {
    match badges::fetch_one(ctx, badge_id).await {
        Some(record) => Badge::try_from(record),
        None => Err(AppError::BadgesNotFound),
    }
}

pub async fn create<C: Context>(ctx: &C, draft: &BadgeDraft) -> ServiceResult<Badge> {
    let record = badges::create(
        ctx,
        &draft.name,
        &draft.description,
        &draft.image,
        draft.rule.tag(),
    )
    .await;
    info!("Created badge {} ({})", record.name, record.id);
    Badge::try_from(record)
}

pub async fn update<C: Context>(ctx: &C, badge_id: i32, draft: &BadgeDraft) -> ServiceResult<Badge> {
    match badges::update(
        ctx,
        badge_id,
        &draft.name,
        &draft.description,
        &draft.image,
        draft.rule.tag(),
    )
    .await
    {
        Some(record) => {
            info!("Updated badge {} ({})", record.name, record.id);
            Badge::try_from(record)
        }
        None => Err(AppError::BadgesNotFound),
    }
}

pub async fn delete<C: Context>(ctx: &C, badge_id: i32) -> ServiceResult<()> {
    // Assignments referencing the badge stay in the roster untouched.
    match badges::delete(ctx, badge_id).await {
        true => {
            info!("Deleted badge {badge_id}");
            Ok(())
        }
        false => Err(AppError::BadgesNotFound),
    }
}

/// How many members currently hold `badge_id`. Works for stale ids as
/// well, since assignments survive badge deletion.
pub async fn holder_count<C: Context>(ctx: &C, badge_id: i32) -> usize {
    members::count_holders(ctx, badge_id).await
}

pub async fn overview<C: Context>(ctx: &C) -> ServiceResult<CatalogOverview> {
    let records = badges::fetch_all(ctx).await;
    let mut badge_views = Vec::with_capacity(records.len());
    for record in records {
        let holders = members::count_holders(ctx, record.id).await;
        badge_views.push(BadgeWithHolders {
            badge: Badge::try_from(record)?,
            holders,
        });
    }
    let members = members::fetch_all(ctx)
        .await
        .into_iter()
        .map(Member::from)
        .collect();
    Ok(CatalogOverview {
        badges: badge_views,
        members,
    })
}
