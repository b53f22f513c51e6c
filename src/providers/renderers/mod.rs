pub mod pdf;
pub mod text;

pub use pdf::PdfRenderer;
pub use text::TextRenderer;
