use crate::{pdf, png, svg, LinePlot};
use std::{io::Write, path::Path, str::FromStr};
use tempfile::NamedTempFile;

/// Renders `plot` to `path`, picking the format from the file extension.
///
/// The image is first written to a temporary file next to `path` and moved
/// into place only once rendering succeeded.
pub fn generate(plot: &LinePlot, path: &Path) -> Result<(), String> {
    let format = ImageFormat::from_path(path)?;
    let svg_content = svg::generate_string(plot);
    let bytes = match format {
        ImageFormat::Svg => svg_content.into_bytes(),
        ImageFormat::Png => png::render_from_string(&svg_content)?,
        ImageFormat::Pdf => pdf::render_from_string(&svg_content)?,
    };
    write_atomically(path, &bytes)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .map_err(|e| format!("Failed to create temporary file in {}: {}", dir.display(), e))?;
    file.write_all(bytes)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    file.persist(path)
        .map_err(|e| format!("Failed to persist {}: {}", path.display(), e))?;
    Ok(())
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ImageFormat {
    Svg,
    Png,
    Pdf,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(format!("Failed to get extension from path: {path:?}"))?;
        extension.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            "pdf" => Ok(ImageFormat::Pdf),
            _ => Err(format!("Unsupported image format: {s:?} (expected svg, png, or pdf)")),
        }
    }
}
