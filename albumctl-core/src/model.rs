//! Album rows

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `album` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// An album that has not been stored yet. The key is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Attach the database-assigned key.
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} ({:.2})",
            self.id, self.title, self.artist, self.price
        )
    }
}
