use crate::common::context::Context;
use crate::events::EventResult;
use crate::models::requests::AdminResponse;
use crate::usecases::badges;

pub async fn handle<C: Context>(ctx: &C, badge_id: i32) -> EventResult {
    badges::delete(ctx, badge_id).await?;
    Ok(AdminResponse::BadgeDeleted { badge_id })
}
