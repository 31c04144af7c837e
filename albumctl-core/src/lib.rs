//! albumctl-core: access to the `album` table of the recordings database
//!
//! Three operations over one verified connection pool: albums by artist,
//! album by key, and insert returning the generated key.

pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod memory;
pub mod model;
pub mod store;

pub use config::DbConfig;
pub use db::{connect, AlbumRepo};
pub use demo::{run_demo, DemoReport};
pub use error::{AlbumError, Result};
pub use memory::MemoryAlbumStore;
pub use model::{Album, NewAlbum};
pub use store::AlbumStore;

pub use sqlx::MySqlPool;
