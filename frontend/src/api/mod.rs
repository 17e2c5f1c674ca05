//! Thin wrappers over the record service's HTTP endpoints.
//!
//! Every operation is a single request with no retry, timeout, or
//! cancellation; callers run these from `spawn_local` and feed the outcome
//! back into component state as a message.

use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

use common::dates::mdy_to_iso;
use common::model::search::SearchField;
use common::model::seva::{NewSevaEntry, SevaEntry};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request rejected before any response arrived.
    #[error("request failed: {0}")]
    Network(String),
    /// The service answered outside the success range.
    #[error("status {code}: {detail}")]
    Status { code: u16, detail: String },
    /// The response body was not the JSON shape this client expects.
    #[error("bad response body: {0}")]
    Parse(String),
}

/// Primary listing, newest fetch wins wholesale.
pub async fn fetch_entries() -> Result<Vec<SevaEntry>, ApiError> {
    fetch_list(Request::get("/data")).await
}

/// Server-side substring match on one column.
pub async fn search_entries(field: SearchField, query: &str) -> Result<Vec<SevaEntry>, ApiError> {
    let request = Request::get("/search").query([("field", field.as_str()), ("query", query)]);
    fetch_list(request).await
}

/// Entries whose date range covers the given day. Accepts either ISO or the
/// datepicker's `MM/DD/YYYY`; the latter is reformatted before the call.
pub async fn search_by_date(raw: &str) -> Result<Vec<SevaEntry>, ApiError> {
    let date = mdy_to_iso(raw);
    let request = Request::get("/search-by-date").query([("date", date.as_str())]);
    fetch_list(request).await
}

pub async fn fetch_trash() -> Result<Vec<SevaEntry>, ApiError> {
    fetch_list(Request::get("/trash")).await
}

/// Creates a new entry; dates in `entry` must already be ISO.
pub async fn create_entry(entry: &NewSevaEntry) -> Result<(), ApiError> {
    let request = Request::post("/data")
        .json(entry)
        .map_err(|err| ApiError::Parse(err.to_string()))?;
    let response = request.send().await.map_err(network_error)?;
    ensure_ok(response).await.map(|_| ())
}

/// Soft delete: moves the entry to the trash set.
pub async fn delete_entry(id: i64) -> Result<(), ApiError> {
    status_only(Request::delete(&format!("/data/{id}"))).await
}

/// Moves a trashed entry back into the primary listing.
pub async fn restore_entry(id: i64) -> Result<(), ApiError> {
    status_only(Request::patch(&format!("/trash/{id}/restore"))).await
}

/// Permanently removes a trashed entry. Irreversible.
pub async fn purge_entry(id: i64) -> Result<(), ApiError> {
    status_only(Request::delete(&format!("/trash/{id}"))).await
}

async fn fetch_list(request: RequestBuilder) -> Result<Vec<SevaEntry>, ApiError> {
    let response = request.send().await.map_err(network_error)?;
    let response = ensure_ok(response).await?;
    response
        .json::<Vec<SevaEntry>>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}

async fn status_only(request: RequestBuilder) -> Result<(), ApiError> {
    let response = request.send().await.map_err(network_error)?;
    ensure_ok(response).await.map(|_| ())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let code = response.status();
        let detail = response.text().await.unwrap_or_default();
        Err(ApiError::Status { code, detail })
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
