//! Repository implementations for database access

pub mod albums;

pub use albums::AlbumRepo;
