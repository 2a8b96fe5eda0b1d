pub mod create_badge;
pub mod delete_badge;
pub mod edit_badge;
pub mod select_image;
pub mod toggle_assignment;

use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::requests::{AdminRequest, AdminResponse};

pub type EventResult = ServiceResult<AdminResponse>;

pub async fn dispatch<C: Context>(ctx: &C, request: AdminRequest) -> EventResult {
    match request {
        AdminRequest::CreateBadge { draft } => create_badge::handle(ctx, draft).await,
        AdminRequest::EditBadge { badge_id, draft } => edit_badge::handle(ctx, badge_id, draft).await,
        AdminRequest::DeleteBadge { badge_id } => delete_badge::handle(ctx, badge_id).await,
        AdminRequest::ToggleAssignment {
            member_id,
            badge_id,
        } => toggle_assignment::handle(ctx, member_id, badge_id).await,
        AdminRequest::SelectImage { path } => select_image::handle(ctx, &path).await,
    }
}
