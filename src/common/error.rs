use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,

    BadgesNotFound,
    BadgesInvalidRule,

    MembersNotFound,

    DraftsNotOpen,

    ImagesUnreadable,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn as_str(&self) -> &str {
        self.code()
    }

    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",

            AppError::BadgesNotFound => "badges.not_found",
            AppError::BadgesInvalidRule => "badges.invalid_rule",

            AppError::MembersNotFound => "members.not_found",

            AppError::DraftsNotOpen => "drafts.not_open",

            AppError::ImagesUnreadable => "images.unreadable",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",

            AppError::BadgesNotFound => "This badge does not exist.",
            AppError::BadgesInvalidRule => "The badge carries an unknown achievement rule.",

            AppError::MembersNotFound => "This member does not exist.",

            AppError::DraftsNotOpen => "No badge is currently being edited.",

            AppError::ImagesUnreadable => "The selected image could not be read.",
        }
    }

    pub const fn response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.message(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}
