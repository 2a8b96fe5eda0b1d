use crate::common::context::Context;
use crate::events::EventResult;
use crate::models::badges::BadgeDraft;
use crate::models::requests::AdminResponse;
use crate::usecases::{badges, drafts};

pub async fn handle<C: Context>(ctx: &C, draft: BadgeDraft) -> EventResult {
    let badge = badges::create(ctx, &draft).await?;
    // The creation dialog never stays open past a commit.
    drafts::cancel(ctx).await;
    Ok(AdminResponse::Badge { badge })
}
