use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diary_core::DiaryError;
use std::fmt;

/// Failure of a single request. Each maps to a fixed status and message;
/// the detail only goes to the log.
#[derive(Debug)]
pub enum AppError {
    /// Reading the diary for the list view failed.
    Load(DiaryError),
    /// A load-modify-save for add, delete or edit failed.
    Save(DiaryError),
    Validation(DiaryError),
    Template(fmt::Error),
    MethodNotAllowed,
    Task(tokio::task::JoinError),
}

impl AppError {
    /// Sorts a core error coming out of a mutating call.
    pub fn from_mutation(err: DiaryError) -> Self {
        if err.is_validation() {
            AppError::Validation(err)
        } else {
            AppError::Save(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Load(_) | AppError::Save(_) | AppError::Template(_) | AppError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::Load(_) => "Failed to load entries",
            AppError::Save(_) => "Failed to save entries",
            AppError::Validation(_) => "Please fill in all fields",
            AppError::Template(_) => "Template error",
            AppError::MethodNotAllowed => "Method not supported",
            AppError::Task(_) => "Internal error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Load(e) | AppError::Save(e) => log::error!("{}: {e}", self.message()),
            AppError::Template(e) => log::error!("rendering failed: {e}"),
            AppError::Task(e) => log::error!("storage task failed: {e}"),
            AppError::Validation(e) => log::debug!("rejected form: {e}"),
            AppError::MethodNotAllowed => {}
        }
        (self.status(), self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_errors_are_sorted() {
        let v = AppError::from_mutation(DiaryError::Validation("missing"));
        assert_eq!(v.status(), StatusCode::BAD_REQUEST);

        let io = DiaryError::Io {
            path: "x".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let s = AppError::from_mutation(io);
        assert_eq!(s.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(s.message(), "Failed to save entries");
    }

    #[test]
    fn method_not_allowed_response() {
        let resp = AppError::MethodNotAllowed.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
