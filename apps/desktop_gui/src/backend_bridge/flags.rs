//! Flag image download and decode, off the UI thread.

use anyhow::{Context, Result};
use reqwest::Client as HttpClient;

const FLAG_THUMBNAIL_WIDTH: u32 = 48;
const FLAG_THUMBNAIL_HEIGHT: u32 = 32;

#[derive(Clone)]
pub struct FlagImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub async fn fetch_flag(http: &HttpClient, url: &str) -> Result<FlagImage> {
    let bytes = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to reach flag url {url}"))?
        .error_for_status()
        .with_context(|| format!("flag url {url} returned error"))?
        .bytes()
        .await
        .context("failed to read flag body")?;
    decode_flag_image(&bytes)
}

pub fn decode_flag_image(bytes: &[u8]) -> Result<FlagImage> {
    let dynamic = image::load_from_memory(bytes).context("unsupported flag image")?;
    let resized = dynamic
        .thumbnail(FLAG_THUMBNAIL_WIDTH, FLAG_THUMBNAIL_HEIGHT)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(FlagImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}
