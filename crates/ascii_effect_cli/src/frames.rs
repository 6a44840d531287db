use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, GenericImageView};
use log::{debug, warn};
use walkdir::WalkDir;

#[derive(Clone, Debug)]
pub struct SourceFrame {
    pub image: DynamicImage,
    /// Display time of the frame, zero when the input carries no timing.
    pub delay: Duration,
}

pub fn load_frames(path: &Path) -> Result<Vec<SourceFrame>> {
    if path.is_dir() {
        return load_frames_from_directory(path);
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if extension == "gif" {
        load_frames_from_gif(path)
    } else {
        Ok(vec![SourceFrame { image: load_image(path)?, delay: Duration::ZERO }])
    }
}

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).with_context(|| format!("failed to open image {:?}", path))?;
    let (w, h) = image.dimensions();
    debug!("loaded image {}x{} from {}", w, h, path.display());
    Ok(image)
}

fn load_frames_from_gif(path: &Path) -> Result<Vec<SourceFrame>> {
    let file = File::open(path).with_context(|| format!("failed to open GIF {:?}", path))?;
    let decoder =
        GifDecoder::new(file).with_context(|| format!("failed to decode GIF {:?}", path))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .with_context(|| format!("failed to collect frames from {:?}", path))?;

    debug!("decoded {} frames from {}", frames.len(), path.display());
    Ok(frames
        .into_iter()
        .map(|frame| {
            let delay = Duration::from(frame.delay());
            SourceFrame { image: DynamicImage::ImageRgba8(frame.into_buffer()), delay }
        })
        .collect())
}

fn load_frames_from_directory(path: &Path) -> Result<Vec<SourceFrame>> {
    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();
    if entries.is_empty() {
        anyhow::bail!("no image files found in {:?}", path);
    }

    let mut frames = Vec::with_capacity(entries.len());
    for entry in entries {
        match load_image(&entry) {
            Ok(image) => frames.push(SourceFrame { image, delay: Duration::ZERO }),
            Err(err) => warn!("skipping {}: {err:#}", entry.display()),
        }
    }

    if frames.is_empty() {
        anyhow::bail!("no decodable images found in {:?}", path);
    }
    Ok(frames)
}
