use crate::common::context::Context;
use crate::events::EventResult;
use crate::models::requests::AdminResponse;
use crate::usecases::drafts;
use std::path::Path;

pub async fn handle<C: Context>(ctx: &C, path: &Path) -> EventResult {
    let applied = drafts::attach_image(ctx, path).await?;
    Ok(AdminResponse::ImageAttached { applied })
}
