use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg};

use crate::foundation::core::{BezPath, Point};

const ARCLEN_ACCURACY: f64 = 1e-6;

#[derive(Clone, Debug)]
struct MeasuredSeg {
    seg: PathSeg,
    start_distance: f64,
    length: f64,
}

/// Arc-length measurement over a [`BezPath`]: total length and the point at a given distance.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    path: BezPath,
    segs: Vec<MeasuredSeg>,
    length: f64,
}

impl PathMeasure {
    pub fn new(path: BezPath) -> Self {
        let mut segs = Vec::new();
        let mut length = 0.0;
        for seg in path.segments() {
            let seg_len = seg.arclen(ARCLEN_ACCURACY);
            segs.push(MeasuredSeg {
                seg,
                start_distance: length,
                length: seg_len,
            });
            length += seg_len;
        }
        Self { path, segs, length }
    }

    /// Measure the straight segment `from -> to`.
    pub fn straight(from: Point, to: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        Self::new(path)
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn start(&self) -> Point {
        self.path
            .elements()
            .iter()
            .find_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            })
            .unwrap_or(Point::ORIGIN)
    }

    pub fn end(&self) -> Point {
        self.segs
            .last()
            .map(|m| m.seg.end())
            .unwrap_or_else(|| self.start())
    }

    /// Point at arc length `distance`, clamped to the path.
    ///
    /// Distances at or past the total length return the exact end point.
    pub fn point_at(&self, distance: f64) -> Point {
        if !distance.is_finite() || distance <= 0.0 || self.segs.is_empty() {
            return self.start();
        }
        if distance >= self.length {
            return self.end();
        }

        let idx = self
            .segs
            .partition_point(|m| m.start_distance + m.length < distance);
        let Some(m) = self.segs.get(idx) else {
            return self.end();
        };
        if m.length <= 0.0 {
            return m.seg.start();
        }
        let t = m
            .seg
            .inv_arclen(distance - m.start_distance, ARCLEN_ACCURACY)
            .clamp(0.0, 1.0);
        m.seg.eval(t)
    }

    /// Point at `fraction` of the total length.
    pub fn point_at_fraction(&self, fraction: f64) -> Point {
        self.point_at(fraction.clamp(0.0, 1.0) * self.length)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
