//! Playlist Sync command-line entry point
//!
//! Fetches the course playlist and rewrites the course page next to the
//! executable. Takes no arguments; `RUST_LOG` adjusts diagnostics only.

use std::path::PathBuf;

use playlist_sync_core::{PlaylistFetcher, update_document};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PLAYLIST_ID: &str = "PL4-IK0AVhVjOJs_UjdQeyEZ_cmEV3uJvx";
const COURSE_PAGE: [&str; 2] = ["courses", "frontend-learning.html"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let page_path = course_page_path()?;

    println!("Fetching videos from playlist: {}", PLAYLIST_ID);
    let fetcher = PlaylistFetcher::new()?;
    let videos = fetcher.fetch_playlist(PLAYLIST_ID).await?;

    println!("Found {} videos", videos.len());
    for (i, video) in videos.iter().enumerate() {
        println!("{}. {} - {}", i + 1, video.title, video.embed_url());
    }

    let written = update_document(&page_path, &videos).await?;
    if written == 0 {
        println!("No videos to update!");
    } else {
        println!("Updated {} with {} videos!", page_path.display(), written);
    }

    Ok(())
}

/// Install the stdout subscriber, `info` unless `RUST_LOG` says otherwise
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();
}

/// Course page location, relative to the directory holding the executable
fn course_page_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let mut path = exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    path.extend(COURSE_PAGE);
    info!(path = %path.display(), "resolved course page");
    Ok(path)
}
