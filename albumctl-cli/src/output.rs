//! Rendering of command results for humans or scripts

use albumctl_core::{Album, DemoReport};
use anyhow::Result;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_album_list(albums: &[Album]) {
    if albums.is_empty() {
        println!("Albums found: none");
        return;
    }
    println!("Albums found: {}", albums.len());
    for album in albums {
        println!("  {album}");
    }
}

pub fn connected(format: OutputFormat, url: &str) -> Result<()> {
    match format {
        OutputFormat::Text => println!("Connected!"),
        OutputFormat::Json => print_json(&json!({ "connected": true, "url": url }))?,
    }
    Ok(())
}

pub fn albums(format: OutputFormat, albums: &[Album]) -> Result<()> {
    match format {
        OutputFormat::Text => print_album_list(albums),
        OutputFormat::Json => print_json(albums)?,
    }
    Ok(())
}

pub fn album(format: OutputFormat, album: &Album) -> Result<()> {
    match format {
        OutputFormat::Text => println!("Album found: {album}"),
        OutputFormat::Json => print_json(album)?,
    }
    Ok(())
}

pub fn added(format: OutputFormat, id: i64) -> Result<()> {
    match format {
        OutputFormat::Text => println!("ID of added album: {id}"),
        OutputFormat::Json => print_json(&json!({ "id": id }))?,
    }
    Ok(())
}

pub fn demo(format: OutputFormat, report: &DemoReport) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_album_list(&report.albums_found);
            println!("Album found: {}", report.album_found);
            println!("ID of added album: {}", report.added_id);
        }
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}
