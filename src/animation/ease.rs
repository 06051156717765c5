/// Progress curve applied to a tween's linear time fraction.
///
/// The car view drives both phases with [`Ease::Linear`]; the other curves are opt-in through
/// `CarConfig::ease`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Ease {
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    /// Map a time fraction (clamped to `[0, 1]`) to progress. Both endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (shape, power) = match self {
            Self::Linear => return t,
            Self::InQuad => (Shape::In, 2),
            Self::OutQuad => (Shape::Out, 2),
            Self::InOutQuad => (Shape::InOut, 2),
            Self::InCubic => (Shape::In, 3),
            Self::OutCubic => (Shape::Out, 3),
            Self::InOutCubic => (Shape::InOut, 3),
        };
        match shape {
            Shape::In => t.powi(power),
            Shape::Out => 1.0 - (1.0 - t).powi(power),
            // First half accelerates, second half mirrors it.
            Shape::InOut if t < 0.5 => (2.0 * t).powi(power) / 2.0,
            Shape::InOut => 1.0 - (2.0 - 2.0 * t).powi(power) / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
