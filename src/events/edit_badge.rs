use crate::common::context::Context;
use crate::events::EventResult;
use crate::models::badges::BadgeDraft;
use crate::models::requests::AdminResponse;
use crate::usecases::{badges, drafts};

pub async fn handle<C: Context>(ctx: &C, badge_id: i32, draft: BadgeDraft) -> EventResult {
    let badge = badges::update(ctx, badge_id, &draft).await?;
    drafts::cancel(ctx).await;
    Ok(AdminResponse::Badge { badge })
}
