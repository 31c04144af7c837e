//! The album store seam
//!
//! [`AlbumRepo`](crate::db::AlbumRepo) implements it against MySQL and
//! [`MemoryAlbumStore`](crate::memory::MemoryAlbumStore) in memory.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Album, NewAlbum};

#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums whose artist equals `artist`. Empty when nothing matches.
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>>;

    /// The album with key `id`, or [`AlbumError::NotFound`](crate::AlbumError::NotFound).
    async fn album_by_id(&self, id: i64) -> Result<Album>;

    /// Store `album` and return its newly assigned key.
    async fn add_album(&self, album: &NewAlbum) -> Result<i64>;
}
