use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{CarDriveError, CarDriveResult},
    view::config::SpriteSize,
};

const BUILTIN_CAR_SVG: &[u8] = include_bytes!("car.svg");

/// The car bitmap: premultiplied RGBA8 at its final, fixed size.
///
/// Loaded and resized once; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Sprite {
    /// Grey top-down car, nose up.
    pub fn builtin_car(size: SpriteSize) -> CarDriveResult<Self> {
        Self::from_svg(BUILTIN_CAR_SVG, size)
    }

    /// Decode PNG/JPEG/… or SVG bytes and resize to `size`.
    pub fn decode(bytes: &[u8], size: SpriteSize) -> CarDriveResult<Self> {
        if looks_like_svg(bytes) {
            Self::from_svg(bytes, size)
        } else {
            Self::from_raster(bytes, size)
        }
    }

    pub fn from_path(path: &Path, size: SpriteSize) -> CarDriveResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read sprite '{}'", path.display()))?;
        Self::decode(&bytes, size).map_err(|e| {
            CarDriveError::asset(format!("sprite '{}': {e}", path.display()))
        })
    }

    pub fn from_raster(bytes: &[u8], size: SpriteSize) -> CarDriveResult<Self> {
        check_size(size)?;
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| CarDriveError::asset(format!("decode image: {e}")))?;
        let rgba = dyn_img.to_rgba8();
        let rgba = if rgba.dimensions() == (size.width, size.height) {
            rgba
        } else {
            // Plain scale to the target box, no filtering.
            image::imageops::resize(
                &rgba,
                size.width,
                size.height,
                image::imageops::FilterType::Nearest,
            )
        };

        let mut rgba8_premul = rgba.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Ok(Self {
            width: size.width,
            height: size.height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    pub fn from_svg(bytes: &[u8], size: SpriteSize) -> CarDriveResult<Self> {
        check_size(size)?;
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| CarDriveError::asset(format!("parse svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
            .ok_or_else(|| CarDriveError::asset("failed to allocate svg pixmap"))?;
        let sx = (size.width as f32) / tree.size().width();
        let sy = (size.height as f32) / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        Ok(Self {
            width: size.width,
            height: size.height,
            rgba8_premul: Arc::new(pixmap.take()),
        })
    }

    pub fn size(&self) -> SpriteSize {
        SpriteSize {
            width: self.width,
            height: self.height,
        }
    }
}

fn check_size(size: SpriteSize) -> CarDriveResult<()> {
    if size.width == 0 || size.height == 0 {
        return Err(CarDriveError::validation(
            "sprite width/height must be non-zero",
        ));
    }
    Ok(())
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let head = String::from_utf8_lossy(head);
    let trimmed = head.trim_start_matches('\u{feff}').trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && head.contains("<svg"))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sprite.rs"]
mod tests;
