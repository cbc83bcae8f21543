use crate::api::{ChartLayout, RenderStyle};
use crate::core::Appointment;
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Read-only inputs handed to a mark layer for one pass.
#[derive(Debug, Clone, Copy)]
pub struct MarkContext<'a> {
    pub layout: &'a ChartLayout,
    pub style: &'a RenderStyle,
}

/// Extension hook that turns appointments into plot marks.
///
/// Layers append primitives to the frame after the axes are built. The
/// chart does not prescribe how time spans or overlaps are placed.
pub trait MarkLayer {
    fn id(&self) -> &str;

    fn build_marks(
        &self,
        data: &[Appointment],
        context: MarkContext<'_>,
        frame: &mut RenderFrame,
    ) -> ChartResult<()>;
}

/// Default layer: draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMarks;

impl MarkLayer for NoMarks {
    fn id(&self) -> &str {
        "none"
    }

    fn build_marks(
        &self,
        _data: &[Appointment],
        _context: MarkContext<'_>,
        _frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        Ok(())
    }
}
