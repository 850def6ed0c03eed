//! Report rendering

pub mod html;

use crate::error::ReportError;
use crate::models::ReportContext;

/// Render a schedule-changes report as a complete HTML document.
///
/// Pure: the only effect is the returned string. Identical contexts always
/// produce identical documents, so calls are safe to repeat or run
/// concurrently.
pub fn render(context: &ReportContext) -> Result<String, ReportError> {
    html::render_document(context)
}
