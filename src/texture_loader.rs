use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in directory: {0}")]
    NoImages(String),
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("failed to create texture for {path}: {reason}")]
    Texture { path: String, reason: String },
}

/// Collects the image files of a directory, sorted by file name so the
/// slide order is stable across runs.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::ReadDir {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::ReadDir {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            match ext.to_lowercase().as_str() {
                "png" | "jpg" | "jpeg" | "bmp" | "gif" => paths.push(path),
                _ => {}
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(LoadError::NoImages(dir.display().to_string()));
    }
    Ok(paths)
}

// EXIF orientation values that matter here:
// 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
// The flip variants are ignored.
fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) if !values.is_empty() => values[0],
                _ => 1,
            },
            None => 1,
        },
        Err(_) => 1,
    }
}

/// Loads an image file into a texture, baking its EXIF orientation into the
/// pixel data so the draw layer never has to rotate.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let display = image_path.display().to_string();
    let file_bytes = fs::read(image_path).map_err(|e| LoadError::ReadFile {
        path: display.clone(),
        source: e,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably out of JPEG containers.
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| LoadError::Decode {
            path: display.clone(),
            reason: e.to_string(),
        })?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(path = %display, "applied 180 deg EXIF rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(path = %display, "applied 90 deg CW EXIF rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(path = %display, "applied 90 deg CCW EXIF rotation");
        }
        1 => {}
        other => {
            warn!(path = %display, orientation = other, "unsupported EXIF orientation, leaving as-is");
        }
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture {
            path: display,
            reason: e.to_string(),
        })?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_scan_sorts_and_filters() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["c.jpg", "a.png", "b.jpeg", "notes.txt", "d.webp"] {
            fs::write(dir.path().join(name), b"x").expect("write file");
        }

        let paths = load_sorted_image_paths(dir.path()).expect("images present");
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpeg", "c.jpg"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_sorted_image_paths(dir.path()).expect_err("no images");
        assert!(matches!(err, LoadError::NoImages(_)));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_sorted_image_paths(&dir.path().join("absent"))
            .expect_err("missing directory");
        assert!(matches!(err, LoadError::ReadDir { .. }));
    }

    #[test]
    fn garbage_bytes_report_a_default_orientation() {
        assert_eq!(exif_orientation(b"not an image"), 1);
    }
}
