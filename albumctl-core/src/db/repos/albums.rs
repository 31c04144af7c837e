//! Album repository
//!
//! Every caller-supplied value is bound as a parameter. `price` is stored as
//! DECIMAL and cast to DOUBLE on read so it decodes into `f64`.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::{AlbumError, Result};
use crate::model::{Album, NewAlbum};
use crate::store::AlbumStore;

const SELECT_BY_ARTIST: &str = r#"
    SELECT id, title, artist, CAST(price AS DOUBLE) AS price
    FROM album
    WHERE artist = ?
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, title, artist, CAST(price AS DOUBLE) AS price
    FROM album
    WHERE id = ?
"#;

const INSERT_ALBUM: &str = "INSERT INTO album (title, artist, price) VALUES (?, ?, ?)";

/// Album repository backed by a verified MySQL pool
pub struct AlbumRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AlbumRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for AlbumRepo<'_> {
    /// Streams the cursor row by row. Any error discards what was collected;
    /// the cursor is released when the stream drops.
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        const OP: &str = "albums_by_artist";
        debug!(op = OP, artist, "query");

        let mut rows = sqlx::query_as::<_, Album>(SELECT_BY_ARTIST)
            .bind(artist)
            .fetch(self.pool);

        let mut albums = Vec::new();
        while let Some(album) = rows
            .try_next()
            .await
            .map_err(|e| AlbumError::query(OP, format!("{artist:?}"), e))?
        {
            albums.push(album);
        }

        debug!(op = OP, artist, count = albums.len(), "query complete");
        Ok(albums)
    }

    async fn album_by_id(&self, id: i64) -> Result<Album> {
        const OP: &str = "album_by_id";
        debug!(op = OP, id, "query");

        sqlx::query_as::<_, Album>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| AlbumError::query(OP, id.to_string(), e))?
            .ok_or(AlbumError::NotFound { id })
    }

    async fn add_album(&self, album: &NewAlbum) -> Result<i64> {
        debug!(op = "add_album", title = %album.title, artist = %album.artist, "insert");

        let result = sqlx::query(INSERT_ALBUM)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(self.pool)
            .await
            .map_err(|source| AlbumError::Insert { source })?;

        let id = insert_key(result.last_insert_id())?;

        debug!(op = "add_album", id, "inserted");
        Ok(id)
    }
}

/// Keys are positive and must fit the `id` column's signed range.
fn insert_key(raw: u64) -> Result<i64> {
    i64::try_from(raw)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AlbumError::InvalidInsertId { id: raw })
}
