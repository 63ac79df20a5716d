// Document rendering: record → HTML, with fixed page geometry and optional
// pre-render truncation. Everything here is pure except the handlers.

pub mod handlers;
pub mod html;
pub mod page;
pub mod truncation;

pub use html::render_document;
pub use page::{PageGeometry, RESUME_PAGE};
pub use truncation::TruncationMode;
