use crate::adapters::images;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::entities::drafts::{DraftRecord, EditorMode};
use crate::models::badges::{Badge, BadgeDraft, BadgeRule};
use crate::models::drafts::EditorView;
use crate::repositories::drafts;
use crate::usecases::badges;
use std::path::Path;
use tracing::{debug, warn};

/// Opens the dialog with an empty draft for a new badge.
pub async fn open_blank<C: Context>(ctx: &C) {
    drafts::open(ctx, EditorMode::Create, DraftRecord::default()).await;
}

/// Opens the dialog pre-filled with an existing badge's fields.
pub async fn open_for_edit<C: Context>(ctx: &C, badge_id: i32) -> ServiceResult<()> {
    let badge = badges::fetch_one(ctx, badge_id).await?;
    let draft = DraftRecord {
        name: badge.name,
        description: badge.description,
        image: badge.image,
        rule: badge.rule.tag().to_owned(),
    };
    drafts::open(ctx, EditorMode::Edit(badge_id), draft).await;
    Ok(())
}

pub async fn set_name<C: Context>(ctx: &C, name: &str) -> ServiceResult<()> {
    match drafts::set_name(ctx, name).await {
        true => Ok(()),
        false => Err(AppError::DraftsNotOpen),
    }
}

pub async fn set_description<C: Context>(ctx: &C, description: &str) -> ServiceResult<()> {
    match drafts::set_description(ctx, description).await {
        true => Ok(()),
        false => Err(AppError::DraftsNotOpen),
    }
}

pub async fn set_rule<C: Context>(ctx: &C, rule: BadgeRule) -> ServiceResult<()> {
    match drafts::set_rule(ctx, rule.tag()).await {
        true => Ok(()),
        false => Err(AppError::DraftsNotOpen),
    }
}

/// Sets the draft image directly, e.g. to an external reference path.
pub async fn set_image<C: Context>(ctx: &C, image: &str) -> ServiceResult<()> {
    match drafts::set_image(ctx, image).await {
        true => Ok(()),
        false => Err(AppError::DraftsNotOpen),
    }
}

/// Encodes a selected file into the draft's image field. The draft is
/// only written once encoding completes; if another selection was made
/// in the meantime, this one is dropped. Returns whether it applied.
pub async fn attach_image<C: Context>(ctx: &C, path: &Path) -> ServiceResult<bool> {
    let token = drafts::begin_image_attach(ctx)
        .await
        .ok_or(AppError::DraftsNotOpen)?;
    let image = match images::read_as_data_uri(path).await {
        Ok(image) => image,
        Err(e) => {
            warn!("Could not read image {}: {e}", path.display());
            return Err(AppError::ImagesUnreadable);
        }
    };
    let applied = drafts::complete_image_attach(ctx, token, image).await;
    if !applied {
        debug!("Dropped image for {}, a newer selection won", path.display());
    }
    Ok(applied)
}

/// Commits the draft into the catalog. The dialog closes whether or
/// not the commit succeeds.
pub async fn commit<C: Context>(ctx: &C) -> ServiceResult<Badge> {
    let session = drafts::clear(ctx).await.ok_or(AppError::DraftsNotOpen)?;
    let draft = BadgeDraft::try_from(session.draft)?;
    match session.mode {
        EditorMode::Create => badges::create(ctx, &draft).await,
        EditorMode::Edit(badge_id) => badges::update(ctx, badge_id, &draft).await,
    }
}

/// Discards the draft without committing.
pub async fn cancel<C: Context>(ctx: &C) {
    let _ = drafts::clear(ctx).await;
}

pub async fn current<C: Context>(ctx: &C) -> ServiceResult<Option<EditorView>> {
    match drafts::current(ctx).await {
        Some(session) => Ok(Some(EditorView::try_from(session)?)),
        None => Ok(None),
    }
}
