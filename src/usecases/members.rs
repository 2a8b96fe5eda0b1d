use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::members::Member;
use crate::repositories::members;
use tracing::info;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Member>> {
    Ok(members::fetch_all(ctx)
        .await
        .into_iter()
        .map(Member::from)
        .collect())
}

pub async fn fetch_one<C: Context>(ctx: &C, member_id: i64) -> ServiceResult<Member> {
    match members::fetch_one(ctx, member_id).await {
        Some(record) => Ok(Member::from(record)),
        None => Err(AppError::MembersNotFound),
    }
}

/// Flips one member's possession of one badge. Returns the updated
/// member and whether the badge is now assigned.
pub async fn toggle_badge<C: Context>(
    ctx: &C,
    member_id: i64,
    badge_id: i32,
) -> ServiceResult<(Member, bool)> {
    match members::toggle_badge(ctx, member_id, badge_id).await {
        Some((record, assigned)) => {
            if assigned {
                info!("Assigned badge {badge_id} to member {member_id}");
            } else {
                info!("Revoked badge {badge_id} from member {member_id}");
            }
            Ok((Member::from(record), assigned))
        }
        None => Err(AppError::MembersNotFound),
    }
}
