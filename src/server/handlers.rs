//! Route handlers.
//!
//! Each handler asks the [`ContactService`](crate::services::ContactService)
//! for an outcome and turns it into either an HTML page or a redirect back to
//! the list carrying a flash.

use super::error::AppError;
use super::flash::{redirect_to_list, take_flash};
use super::views;
use super::AppState;
use crate::domain::{ContactId, FieldErrors};
use crate::models::{ContactForm, Flash};
use crate::services::{SubmitOutcome, CONTACT_NOT_FOUND};
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;

fn error_flashes(errors: &FieldErrors) -> Vec<Flash> {
    errors.messages().into_iter().map(Flash::error).collect()
}

fn not_found_redirect(jar: SignedCookieJar) -> Response {
    redirect_to_list(jar, &Flash::error(CONTACT_NOT_FOUND)).into_response()
}

/// `GET /`
pub async fn list_contacts(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let contacts = state.contacts.list_contacts().await?;
    let (jar, flash) = take_flash(jar);
    let flashes: Vec<Flash> = flash.into_iter().collect();
    let page = views::list_page(
        &contacts,
        &ContactForm::default(),
        &FieldErrors::new(),
        &flashes,
    );
    Ok((jar, Html(page)))
}

/// `POST /`
pub async fn create_contact(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    match state.contacts.create_contact(&form).await? {
        SubmitOutcome::Saved(flash) | SubmitOutcome::NotFound(flash) => {
            Ok(redirect_to_list(jar, &flash).into_response())
        }
        SubmitOutcome::Rejected(errors) => {
            let contacts = state.contacts.list_contacts().await?;
            let page = views::list_page(&contacts, &form, &errors, &error_flashes(&errors));
            Ok(Html(page).into_response())
        }
    }
}

/// `GET /{id}/edit/`
pub async fn edit_contact_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = raw_id.parse::<ContactId>() else {
        return Ok(not_found_redirect(jar));
    };
    let Some(contact) = state.contacts.get_contact(id).await? else {
        return Ok(not_found_redirect(jar));
    };

    let page = views::edit_page(id, &ContactForm::from(&contact), &FieldErrors::new(), &[]);
    Ok(Html(page).into_response())
}

/// `POST /{id}/edit/`
pub async fn update_contact(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(raw_id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let Ok(id) = raw_id.parse::<ContactId>() else {
        return Ok(not_found_redirect(jar));
    };

    match state.contacts.update_contact(id, &form).await? {
        SubmitOutcome::Saved(flash) | SubmitOutcome::NotFound(flash) => {
            Ok(redirect_to_list(jar, &flash).into_response())
        }
        SubmitOutcome::Rejected(errors) => {
            let page = views::edit_page(id, &form, &errors, &error_flashes(&errors));
            Ok(Html(page).into_response())
        }
    }
}

/// `POST /{id}/delete/`
pub async fn delete_contact(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = raw_id.parse::<ContactId>() else {
        return Ok(not_found_redirect(jar));
    };
    let flash = state.contacts.delete_contact(id).await?;
    Ok(redirect_to_list(jar, &flash).into_response())
}

/// `/{id}/edit` and `/{id}/delete`: permanent redirect to the slash form.
///
/// 308 keeps the method, so a form posted without the slash still lands on
/// the POST route.
pub async fn append_trailing_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&target)
}
