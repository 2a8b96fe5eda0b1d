use badge_service::common::error::AppError;
use badge_service::common::init;
use badge_service::common::state::AppState;
use badge_service::entities::badges::{PLACEHOLDER_IMAGE, demo_catalog};
use badge_service::entities::members::demo_roster;
use badge_service::events;
use badge_service::models::badges::{BadgeDraft, BadgeRule};
use badge_service::models::requests::{AdminRequest, AdminResponse};
use badge_service::repositories::drafts as editor;
use badge_service::settings::AppSettings;
use badge_service::usecases::{badges, drafts, members};
use std::io::Write;
use std::path::Path;
use tracing::Level;

fn demo_state() -> AppState {
    AppState::seeded(demo_catalog(), demo_roster())
}

fn draft(name: &str, rule: BadgeRule) -> BadgeDraft {
    BadgeDraft {
        name: name.to_owned(),
        description: String::new(),
        image: String::new(),
        rule,
    }
}

#[tokio::test]
async fn initialized_state_carries_the_demo_data() {
    let settings = AppSettings {
        level: Level::INFO,
        seed_demo_data: true,
    };
    let state = init::initialize_state(&settings);

    assert_eq!(badges::fetch_all(&state).await.unwrap().len(), 2);
    assert_eq!(members::fetch_all(&state).await.unwrap().len(), 5);
    let badge = badges::create(&state, &draft("Silver", BadgeRule::TenureYear2))
        .await
        .unwrap();
    assert_eq!(badge.id, 3);
}

#[tokio::test]
async fn an_unseeded_state_starts_empty() {
    let settings = AppSettings {
        level: Level::INFO,
        seed_demo_data: false,
    };
    let state = init::initialize_state(&settings);

    assert!(badges::fetch_all(&state).await.unwrap().is_empty());
    let badge = badges::create(&state, &draft("Silver", BadgeRule::TenureYear2))
        .await
        .unwrap();
    assert_eq!(badge.id, 1);
}

#[tokio::test]
async fn create_appends_a_badge_with_a_fresh_id() {
    let state = AppState::seeded(demo_catalog().into_iter().take(1).collect(), demo_roster());

    let badge = badges::create(&state, &draft("Silver", BadgeRule::TenureYear2))
        .await
        .unwrap();

    assert_eq!(badge.id, 2);
    assert_eq!(badge.name, "Silver");
    assert_eq!(badge.rule, BadgeRule::TenureYear2);
    let catalog = badges::fetch_all(&state).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1].id, 2);
}

#[tokio::test]
async fn deleted_ids_are_never_handed_out_again() {
    let state = demo_state();

    badges::delete(&state, 2).await.unwrap();
    let badge = badges::create(&state, &draft("Silver", BadgeRule::TenureYear2))
        .await
        .unwrap();

    assert_eq!(badge.id, 3);
}

#[tokio::test]
async fn update_replaces_fields_but_keeps_id_and_size() {
    let state = demo_state();
    let replacement = BadgeDraft {
        name: "Platinum Member".to_owned(),
        description: "A decade of membership".to_owned(),
        image: PLACEHOLDER_IMAGE.to_owned(),
        rule: BadgeRule::LevelReached10,
    };

    let badge = badges::update(&state, 1, &replacement).await.unwrap();

    assert_eq!(badge.id, 1);
    assert_eq!(badge.name, "Platinum Member");
    assert_eq!(badge.rule, BadgeRule::LevelReached10);
    assert_eq!(badges::fetch_all(&state).await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_of_an_unknown_badge_fails() {
    let state = demo_state();
    let result = badges::update(&state, 99, &draft("Ghost", BadgeRule::TenureYear1)).await;
    assert!(matches!(result, Err(AppError::BadgesNotFound)));
}

#[tokio::test]
async fn delete_leaves_assignments_dangling() {
    let state = demo_state();

    badges::delete(&state, 2).await.unwrap();

    assert_eq!(badges::fetch_all(&state).await.unwrap().len(), 1);
    // Members 1, 2, 4 and 5 still hold the deleted badge.
    assert_eq!(badges::holder_count(&state, 2).await, 4);
    // Toggling against the stale id keeps working.
    let (member, assigned) = members::toggle_badge(&state, 2, 2).await.unwrap();
    assert!(!assigned);
    assert!(member.badges.is_empty());
}

#[tokio::test]
async fn toggle_is_reversed_by_a_second_toggle() {
    let state = demo_state();

    let (member, assigned) = members::toggle_badge(&state, 1, 2).await.unwrap();
    assert!(!assigned);
    assert_eq!(member.badges.len(), 1);
    assert!(member.badges.contains(&1));

    let (member, assigned) = members::toggle_badge(&state, 1, 2).await.unwrap();
    assert!(assigned);
    assert_eq!(member.badges.len(), 2);
    assert!(member.badges.contains(&1) && member.badges.contains(&2));
}

#[tokio::test]
async fn toggle_touches_only_the_target_member() {
    let state = demo_state();

    members::toggle_badge(&state, 1, 2).await.unwrap();

    let roster = members::fetch_all(&state).await.unwrap();
    let bob = roster.iter().find(|member| member.id == 4).unwrap();
    assert_eq!(bob.badges.len(), 2);
    assert!(bob.badges.contains(&1) && bob.badges.contains(&2));
}

#[tokio::test]
async fn toggle_for_an_unknown_member_fails() {
    let state = demo_state();
    let result = members::toggle_badge(&state, 42, 1).await;
    assert!(matches!(result, Err(AppError::MembersNotFound)));
}

#[tokio::test]
async fn editor_commits_a_new_badge_and_closes() {
    let state = demo_state();

    drafts::open_blank(&state).await;
    drafts::set_name(&state, "Silver").await.unwrap();
    drafts::set_description(&state, "Two years in").await.unwrap();
    drafts::set_rule(&state, BadgeRule::TenureYear2).await.unwrap();

    let badge = drafts::commit(&state).await.unwrap();

    assert_eq!(badge.id, 3);
    assert_eq!(badge.description, "Two years in");
    assert_eq!(badges::fetch_all(&state).await.unwrap().len(), 3);
    assert!(drafts::current(&state).await.unwrap().is_none());
}

#[tokio::test]
async fn editor_prefills_and_updates_an_existing_badge() {
    let state = demo_state();

    drafts::open_for_edit(&state, 1).await.unwrap();
    let view = drafts::current(&state).await.unwrap().unwrap();
    assert_eq!(view.editing, Some(1));
    assert_eq!(view.draft.name, "Gold Member");

    // Only the name changes; the other fields keep their prefill.
    drafts::set_name(&state, "Platinum Member").await.unwrap();
    let badge = drafts::commit(&state).await.unwrap();

    assert_eq!(badge.id, 1);
    assert_eq!(badge.name, "Platinum Member");
    assert_eq!(
        badge.description,
        "Awarded to members with 5 years of continuous membership"
    );
    assert_eq!(badges::fetch_all(&state).await.unwrap().len(), 2);
}

#[tokio::test]
async fn editor_operations_require_an_open_dialog() {
    let state = demo_state();

    assert!(matches!(
        drafts::set_name(&state, "Silver").await,
        Err(AppError::DraftsNotOpen)
    ));
    assert!(matches!(
        drafts::commit(&state).await,
        Err(AppError::DraftsNotOpen)
    ));
}

#[tokio::test]
async fn attach_image_inlines_the_selected_file() {
    let state = demo_state();
    let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
    file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

    drafts::open_blank(&state).await;
    let applied = drafts::attach_image(&state, file.path()).await.unwrap();

    assert!(applied);
    let view = drafts::current(&state).await.unwrap().unwrap();
    assert!(view.draft.image.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn unreadable_image_keeps_the_previous_draft_value() {
    let state = demo_state();

    drafts::open_blank(&state).await;
    drafts::set_image(&state, PLACEHOLDER_IMAGE).await.unwrap();

    let result = drafts::attach_image(&state, Path::new("/nonexistent/badge.png")).await;

    assert!(matches!(result, Err(AppError::ImagesUnreadable)));
    let view = drafts::current(&state).await.unwrap().unwrap();
    assert_eq!(view.draft.image, PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn a_superseded_image_attach_is_dropped() {
    let state = demo_state();
    let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
    file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

    drafts::open_blank(&state).await;
    // First selection is still encoding when a second one starts.
    let stale_token = editor::begin_image_attach(&state).await.unwrap();
    let applied = drafts::attach_image(&state, file.path()).await.unwrap();
    assert!(applied);

    let late = editor::complete_image_attach(&state, stale_token, "data:stale".to_owned()).await;

    assert!(!late);
    let view = drafts::current(&state).await.unwrap().unwrap();
    assert!(view.draft.image.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn overview_pairs_badges_with_holder_counts() {
    let state = demo_state();

    let overview = badges::overview(&state).await.unwrap();

    assert_eq!(overview.badges.len(), 2);
    assert_eq!(overview.badges[0].holders, 3);
    assert_eq!(overview.badges[1].holders, 4);
    assert_eq!(overview.members.len(), 5);

    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["badges"][0]["badge"]["rule"], "TestDate1Year");
    assert_eq!(json["badges"][0]["badge"]["name"], "Gold Member");
}

#[tokio::test]
async fn dispatched_requests_drive_the_same_operations() {
    let state = demo_state();

    drafts::open_blank(&state).await;
    let response = events::dispatch(
        &state,
        AdminRequest::CreateBadge {
            draft: draft("Silver", BadgeRule::TenureYear2),
        },
    )
    .await
    .unwrap();
    let AdminResponse::Badge { badge } = response else {
        panic!("expected a badge response");
    };
    assert_eq!(badge.id, 3);
    // Committing through the dialog closes it.
    assert!(drafts::current(&state).await.unwrap().is_none());

    let response = events::dispatch(
        &state,
        AdminRequest::ToggleAssignment {
            member_id: 3,
            badge_id: 3,
        },
    )
    .await
    .unwrap();
    assert!(matches!(
        response,
        AdminResponse::Assignment { assigned: true, .. }
    ));

    let result = events::dispatch(&state, AdminRequest::DeleteBadge { badge_id: 99 }).await;
    assert!(matches!(result, Err(AppError::BadgesNotFound)));

    let result = events::dispatch(
        &state,
        AdminRequest::SelectImage {
            path: "/nonexistent/badge.png".into(),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::DraftsNotOpen)));

    let response = events::dispatch(
        &state,
        AdminRequest::EditBadge {
            badge_id: 3,
            draft: draft("Sterling Silver", BadgeRule::TenureYear2),
        },
    )
    .await
    .unwrap();
    let AdminResponse::Badge { badge } = response else {
        panic!("expected a badge response");
    };
    assert_eq!(badge.name, "Sterling Silver");
}
