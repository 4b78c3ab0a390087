//! Axum route handlers for the diary pages and forms.

use crate::error::AppError;
use crate::render::{Notice, edit_page, index_page};
use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use chrono::Local;
use diary_core::{Diary, Entry};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub struct AppState {
    pub diary: Diary,
}

/// Form and query fields default to "" when absent, like an empty form value.
#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default, rename = "originalDate")]
    pub original_date: String,
    #[serde(default, rename = "originalContent")]
    pub original_content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub success: Option<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.diary.config.static_dir.clone();
    Router::new()
        .route("/", get(index).fallback(redirect_home))
        .route("/add", post(add).fallback(redirect_home))
        .route("/delete", post(delete).fallback(redirect_home))
        .route(
            "/edit",
            get(edit_form).post(edit_apply).fallback(method_not_allowed),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// A body that can't be read as a url-encoded form counts as a form with every field empty.
fn form_or_empty<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            log::debug!("unreadable form body: {rejection}");
            T::default()
        }
    }
}

/// Runs a blocking diary call off the async workers.
async fn with_diary<T, F>(state: &Arc<AppState>, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Diary) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&state.diary))
        .await
        .map_err(AppError::Task)
}

// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let entries = with_diary(&state, |d| d.list())
        .await?
        .map_err(AppError::Load)?;
    let notice = query.success.as_deref().and_then(|s| s.parse::<Notice>().ok());
    let today = Local::now().format(&state.diary.config.date_format);
    let page = index_page(&entries, notice, today).map_err(AppError::Template)?;
    Ok(Html(page))
}

// POST /add
pub async fn add(
    State(state): State<Arc<AppState>>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_empty(form);
    let entry = with_diary(&state, move |d| d.add(&form.date, &form.content))
        .await?
        .map_err(AppError::from_mutation)?;
    log::info!("added entry dated {:?}", entry.date);
    Ok(Redirect::to(&Notice::Added.redirect_target()))
}

// POST /delete
pub async fn delete(
    State(state): State<Arc<AppState>>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_empty(form);
    let date = form.date.clone();
    let removed = with_diary(&state, move |d| d.delete(&form.date, &form.content))
        .await?
        .map_err(AppError::from_mutation)?;
    log::info!(
        "deleted {removed} entr{} dated {date:?}",
        if removed == 1 { "y" } else { "ies" }
    );
    Ok(Redirect::to(&Notice::Deleted.redirect_target()))
}

// GET /edit
pub async fn edit_form(Query(query): Query<EntryForm>) -> Result<Html<String>, AppError> {
    // Echoed as given; the pair is not looked up in the diary.
    let entry = Entry::new(query.date, query.content);
    let page = edit_page(&entry).map_err(AppError::Template)?;
    Ok(Html(page))
}

// POST /edit
pub async fn edit_apply(
    State(state): State<Arc<AppState>>,
    form: Result<Form<EditForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let form = form_or_empty(form);
    let original = Entry::new(form.original_date, form.original_content);
    let replacement = Entry::new(form.date, form.content);
    let original_date = original.date.clone();
    let replaced = with_diary(&state, move |d| d.edit(&original, replacement))
        .await?
        .map_err(AppError::from_mutation)?;
    if replaced {
        log::info!("edited entry dated {original_date:?}");
    } else {
        log::debug!("edit matched no entry dated {original_date:?}");
    }
    Ok(Redirect::to(&Notice::Edited.redirect_target()))
}

pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
