use crate::common::context::Context;
use crate::entities::drafts::{DraftRecord, EditorMode, EditorSession};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Holds the badge dialog's in-progress draft. At most one creation or
/// edit session is open at a time, matching the single dialog.
#[derive(Debug, Default)]
pub struct EditorStore {
    inner: RwLock<Option<EditorSession>>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub async fn open<C: Context>(ctx: &C, mode: EditorMode, draft: DraftRecord) {
    let mut editor = ctx.editor().inner.write().await;
    *editor = Some(EditorSession::new(mode, draft));
}

pub async fn current<C: Context>(ctx: &C) -> Option<EditorSession> {
    ctx.editor().inner.read().await.clone()
}

/// Discards the open session, closing the dialog, and returns it.
pub async fn clear<C: Context>(ctx: &C) -> Option<EditorSession> {
    ctx.editor().inner.write().await.take()
}

async fn update_draft<C: Context>(ctx: &C, apply: impl FnOnce(&mut DraftRecord)) -> bool {
    let mut editor = ctx.editor().inner.write().await;
    match editor.as_mut() {
        Some(session) => {
            apply(&mut session.draft);
            true
        }
        None => false,
    }
}

pub async fn set_name<C: Context>(ctx: &C, name: &str) -> bool {
    update_draft(ctx, |draft| draft.name = name.to_owned()).await
}

pub async fn set_description<C: Context>(ctx: &C, description: &str) -> bool {
    update_draft(ctx, |draft| draft.description = description.to_owned()).await
}

pub async fn set_rule<C: Context>(ctx: &C, rule: &str) -> bool {
    update_draft(ctx, |draft| draft.rule = rule.to_owned()).await
}

pub async fn set_image<C: Context>(ctx: &C, image: &str) -> bool {
    update_draft(ctx, |draft| draft.image = image.to_owned()).await
}

/// Registers a new image attach and returns its token, invalidating any
/// attach still in flight.
pub async fn begin_image_attach<C: Context>(ctx: &C) -> Option<Uuid> {
    let mut editor = ctx.editor().inner.write().await;
    let session = editor.as_mut()?;
    let token = Uuid::new_v4();
    session.image_token = Some(token);
    Some(token)
}

/// Writes the encoded image into the draft, unless the session closed
/// or a newer attach replaced `token` in the meantime.
pub async fn complete_image_attach<C: Context>(ctx: &C, token: Uuid, image: String) -> bool {
    let mut editor = ctx.editor().inner.write().await;
    match editor.as_mut() {
        Some(session) if session.image_token == Some(token) => {
            session.draft.image = image;
            session.image_token = None;
            true
        }
        _ => false,
    }
}
