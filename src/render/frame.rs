use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CarDriveError, CarDriveResult};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Copy with straight (non-premultiplied) alpha.
    pub fn to_straight(&self) -> FrameRGBA {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_in_place(&mut data);
        }
        FrameRGBA {
            width: self.width,
            height: self.height,
            data,
            premultiplied: false,
        }
    }

    pub fn save_png(&self, path: &Path) -> CarDriveResult<()> {
        let straight = self.to_straight();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &straight.data,
            straight.width,
            straight.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| CarDriveError::render(format!("write png '{}': {e}", path.display())))
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
