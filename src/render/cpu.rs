use std::sync::Arc;

use kurbo::{PathEl, Stroke, StrokeOpts};

use crate::{
    assets::sprite::Sprite,
    foundation::{
        core::{Affine, BezPath, Canvas, Point, Rgba8Premul, Vec2},
        error::{CarDriveError, CarDriveResult},
    },
    render::frame::FrameRGBA,
    view::{car::CarView, config::SpriteSize},
};

const STROKE_TOLERANCE: f64 = 0.1;

/// Sprite-to-display transform: rotate about the sprite centre, then move that centre onto
/// `position`.
///
/// The rotation is applied in sprite-local space first; swapping the two would pivot the
/// sprite around the display origin.
pub fn car_transform(heading_deg: f64, position: Point, sprite: SpriteSize) -> Affine {
    let half = Vec2::new(f64::from(sprite.width) / 2.0, f64::from(sprite.height) / 2.0);
    let rotate = Affine::rotate_about(heading_deg.to_radians(), half.to_point());
    let translate = Affine::translate(position.to_vec2() - half);
    translate * rotate
}

/// Draws a [`CarView`] into premultiplied RGBA8 frames with `vello_cpu`.
pub struct CarRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    background: [u8; 4],
    sprite: Sprite,
    sprite_paint: vello_cpu::Image,
    pixmap: vello_cpu::Pixmap,
}

impl CarRenderer {
    /// `background` is straight-alpha RGBA.
    pub fn new(canvas: Canvas, sprite: Sprite, background: [u8; 4]) -> CarDriveResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CarDriveError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CarDriveError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(CarDriveError::render("canvas must be non-empty"));
        }

        let sprite_pixmap =
            premul_bytes_to_pixmap(sprite.rgba8_premul.as_slice(), sprite.width, sprite.height)?;
        let sprite_paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(sprite_pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        Ok(Self {
            canvas,
            width,
            height,
            background,
            sprite,
            sprite_paint,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn render(&mut self, view: &CarView) -> CarDriveResult<FrameRGBA> {
        clear_pixmap(&mut self.pixmap, Rgba8Premul::transparent().to_array());

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let [r, g, b, a] = self.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));

        let cfg = view.config();
        if cfg.paint_path
            && let Some(measure) = view.path()
        {
            let outline = kurbo::stroke(
                measure.path().iter(),
                &Stroke::new(cfg.path_stroke_width),
                &StrokeOpts::default(),
                STROKE_TOLERANCE,
            );
            let [r, g, b, a] = cfg.path_color;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }

        let transform = car_transform(view.heading(), view.position(), self.sprite.size());
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_paint(self.sprite_paint.clone());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.sprite.width),
            f64::from(self.sprite.height),
        ));

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CarDriveResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CarDriveError::render("sprite width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CarDriveError::render("sprite height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CarDriveError::render("sprite byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
