//! In-memory album store
//!
//! Same contract as the MySQL repository; keys start at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AlbumError, Result};
use crate::model::{Album, NewAlbum};
use crate::store::AlbumStore;

#[derive(Debug)]
struct Inner {
    albums: BTreeMap<i64, Album>,
    next_id: i64,
}

#[derive(Debug)]
pub struct MemoryAlbumStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryAlbumStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                albums: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored albums
    pub async fn len(&self) -> usize {
        self.inner.lock().await.albums.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .albums
            .values()
            .filter(|album| album.artist == artist)
            .cloned()
            .collect())
    }

    async fn album_by_id(&self, id: i64) -> Result<Album> {
        let inner = self.inner.lock().await;
        inner
            .albums
            .get(&id)
            .cloned()
            .ok_or(AlbumError::NotFound { id })
    }

    async fn add_album(&self, album: &NewAlbum) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.albums.insert(id, album.clone().with_id(id));
        Ok(id)
    }
}
