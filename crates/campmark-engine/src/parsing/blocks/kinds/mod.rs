pub mod block_quote;
pub mod code_fence;
pub mod list_marker;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use list_marker::ListMarker;
pub use paragraph::Paragraph;
