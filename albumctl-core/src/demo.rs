//! The fixed demonstration run: look up by artist, look up by key, insert.

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::Result;
use crate::model::{Album, NewAlbum};
use crate::store::AlbumStore;

pub const DEMO_ARTIST: &str = "John Coltrane";
pub const DEMO_ID: i64 = 2;

/// The album inserted at the end of the demonstration
pub fn demo_album() -> NewAlbum {
    NewAlbum::new("The Modern Sound of Betty Carter", "Betty Carter", 49.99)
}

/// Results of each demonstration step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub albums_found: Vec<Album>,
    pub album_found: Album,
    pub added_id: i64,
}

/// Run the three operations in order, stopping at the first error.
#[instrument(skip_all)]
pub async fn run_demo(store: &dyn AlbumStore) -> Result<DemoReport> {
    let albums_found = store.albums_by_artist(DEMO_ARTIST).await?;
    info!(artist = DEMO_ARTIST, count = albums_found.len(), "albums by artist");

    let album_found = store.album_by_id(DEMO_ID).await?;
    info!(id = DEMO_ID, "album by id");

    let added_id = store.add_album(&demo_album()).await?;
    info!(id = added_id, "album added");

    Ok(DemoReport {
        albums_found,
        album_found,
        added_id,
    })
}
