use crate::foundation::{core::Canvas, error::CarDriveResult};

/// Source of the display size the view is laid out against.
///
/// Queried once, when the view is built. The size uses the same coordinate space as pointer
/// events.
pub trait DisplaySize {
    fn size(&self) -> CarDriveResult<Canvas>;
}

/// A display whose size is known up front (headless rendering, tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDisplay(pub Canvas);

impl DisplaySize for FixedDisplay {
    fn size(&self) -> CarDriveResult<Canvas> {
        Ok(self.0)
    }
}

impl DisplaySize for Canvas {
    fn size(&self) -> CarDriveResult<Canvas> {
        Ok(*self)
    }
}
