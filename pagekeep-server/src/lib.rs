//! HTTP API for the Pagekeep wiki.
//!
//! Thin glue over [`pagekeep_engine::Wiki`]:
//!
//! - `GET /wiki/{name}` — render a page. `name` is `Namespace:Page`, or a
//!   bare `Namespace` for its default page.
//! - `GET /files/{ns}/{file}` — serve a namespace auxiliary file with its
//!   declared content type.
//! - `POST /wiki/{name}/edit` — append a single-field edit.
//! - `POST /wiki/{name}/delete` — append a deletion revision.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pagekeep_engine::{resolve_page, EngineError, Wiki};
use pagekeep_store::{FsStore, PageStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// A single-field edit request.
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub message: String,
    pub field: String,
    /// The new value: UTF-8 text, or base64 when `base64` is set (the
    /// upload path for file-kind fields).
    pub value: String,
    #[serde(default)]
    pub base64: bool,
}

/// A page-deletion request.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub message: String,
}

/// Acknowledgement for a mutation, with the page's new history length.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub revisions: usize,
}

/// Builds the HTTP router over a wiki engine.
pub fn build_router(wiki: Arc<Wiki<FsStore>>) -> Router {
    Router::new()
        .route("/wiki/{name}", get(get_page))
        .route("/wiki/{name}/edit", post(post_edit))
        .route("/wiki/{name}/delete", post(post_delete))
        .route("/files/{ns}/{file}", get(get_file))
        .with_state(wiki)
}

/// Splits a request name into (namespace, page), applying the schema's
/// default page to bare-namespace requests.
fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once(':') {
        Some((ns, page)) => (ns, Some(page)),
        None => (name, None),
    }
}

async fn get_page(
    State(wiki): State<Arc<Wiki<FsStore>>>,
    Path(name): Path<String>,
) -> Response {
    let (namespace, requested) = split_name(&name);
    let schema = match wiki.store().load_schema(namespace) {
        Ok(schema) => schema,
        Err(err) => return store_error_response(namespace, err),
    };
    let page = resolve_page(&schema, requested);

    match wiki.render_current(namespace, page) {
        Ok(fragment) => Html(page_shell(namespace, page, &fragment)).into_response(),
        Err(err) => engine_error_response(namespace, err),
    }
}

async fn get_file(
    State(wiki): State<Arc<Wiki<FsStore>>>,
    Path((ns, file)): Path<(String, String)>,
) -> Response {
    let schema = match wiki.store().load_schema(&ns) {
        Ok(schema) => schema,
        Err(err) => return store_error_response(&ns, err),
    };
    match schema.file(&file) {
        Some(found) => (
            [(header::CONTENT_TYPE, found.content_type.clone())],
            found.content.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, format!("no file {file:?} in {ns:?}")).into_response(),
    }
}

async fn post_edit(
    State(wiki): State<Arc<Wiki<FsStore>>>,
    Path(name): Path<String>,
    Json(req): Json<EditRequest>,
) -> Response {
    let (namespace, requested) = split_name(&name);
    let schema = match wiki.store().load_schema(namespace) {
        Ok(schema) => schema,
        Err(err) => return store_error_response(namespace, err),
    };
    let page = resolve_page(&schema, requested);

    let value = if req.base64 {
        match BASE64.decode(req.value.as_bytes()) {
            Ok(bytes) => bytes,
            Err(err) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("invalid base64 value: {err}"),
                )
                    .into_response();
            }
        }
    } else {
        req.value.into_bytes()
    };

    match wiki.edit_field(namespace, page, &req.message, &req.field, value) {
        Ok(revisions) => Json(MutationResponse { revisions }).into_response(),
        Err(err) => engine_error_response(namespace, err),
    }
}

async fn post_delete(
    State(wiki): State<Arc<Wiki<FsStore>>>,
    Path(name): Path<String>,
    Json(req): Json<DeleteRequest>,
) -> Response {
    let (namespace, requested) = split_name(&name);
    let schema = match wiki.store().load_schema(namespace) {
        Ok(schema) => schema,
        Err(err) => return store_error_response(namespace, err),
    };
    let page = resolve_page(&schema, requested);

    match wiki.delete_page(namespace, page, &req.message) {
        Ok(revisions) => Json(MutationResponse { revisions }).into_response(),
        Err(err) => engine_error_response(namespace, err),
    }
}

/// Wraps a rendered fragment in the document shell. The stylesheet link
/// points at the namespace's `style.css` auxiliary file, if one exists.
fn page_shell(namespace: &str, page: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{namespace}:{page}</title>\n\
         <link href=\"/files/{namespace}/style.css\" rel=\"stylesheet\">\n\
         </head>\n<body>\n{fragment}\n</body>\n</html>"
    )
}

fn store_error_response(namespace: &str, err: StoreError) -> Response {
    engine_error_response(namespace, EngineError::Store(err))
}

fn engine_error_response(namespace: &str, err: EngineError) -> Response {
    let (status, body) = match &err {
        EngineError::Store(StoreError::UnknownNamespace(ns)) => {
            (StatusCode::NOT_FOUND, format!("unknown namespace: {ns}"))
        }
        EngineError::Store(StoreError::InvalidName(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        EngineError::Codec(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "corrupt or incomplete revision data".to_string(),
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };
    if status.is_server_error() {
        warn!(namespace, %err, "request failed");
    }
    (status, body).into_response()
}
