use crate::common::context::Context;
use crate::events::EventResult;
use crate::models::requests::AdminResponse;
use crate::usecases::members;

pub async fn handle<C: Context>(ctx: &C, member_id: i64, badge_id: i32) -> EventResult {
    let (member, assigned) = members::toggle_badge(ctx, member_id, badge_id).await?;
    Ok(AdminResponse::Assignment { member, assigned })
}
