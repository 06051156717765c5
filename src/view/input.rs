use crate::foundation::core::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
        }
    }

    /// A full tap (down then up) at one point.
    pub fn tap(x: f64, y: f64) -> [Self; 2] {
        [Self::down(x, y), Self::up(x, y)]
    }
}
