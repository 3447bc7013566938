//! Page handlers.
//!
//! Each request fetches fresh upstream data; nothing is shared between
//! requests except the HTTP client pool and the template cache.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};

use crate::catalog::{filter, find_artist, find_relation, QueryParameters};
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::render::{ArtistPage, ArtistsPage};

/// GET /
pub async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/artists")])
}

/// GET /artists?q=&year_min=&year_max=&members_min=
pub async fn list_artists(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = QueryParameters::from_pairs(&pairs);

    let artists = state.upstream.artist_list().await?;
    let filtered = filter(&artists, &query);

    tracing::debug!(
        total = artists.len(),
        matched = filtered.len(),
        unconstrained = query.is_unconstrained(),
        query = ?query,
        "Artists filtered"
    );

    let html = state
        .renderer
        .artists_page(&ArtistsPage::new(&filtered, &query))?;
    Ok(Html(html))
}

/// GET /artist?id=
pub async fn show_artist(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let raw_id = pairs
        .iter()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.as_str())
        .unwrap_or("");
    if raw_id.is_empty() {
        return Err(AppError::MissingParameter("id"));
    }

    let (artists, relations) = state.upstream.artists_with_relations().await?;

    // A non-numeric id cannot match any artist.
    let artist = raw_id
        .parse::<i64>()
        .ok()
        .and_then(|id| find_artist(&artists, id))
        .ok_or_else(|| AppError::ArtistNotFound(raw_id.to_string()))?;
    let concerts = find_relation(&relations, artist.id);

    tracing::debug!(
        artist_id = artist.id,
        locations = concerts.dates_locations.len(),
        has_concerts = !concerts.is_empty(),
        "Artist resolved"
    );

    let html = state.renderer.artist_page(&ArtistPage {
        artist,
        concerts: &concerts,
    })?;
    Ok(Html(html))
}

/// Any path without a route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "page not found")
}
