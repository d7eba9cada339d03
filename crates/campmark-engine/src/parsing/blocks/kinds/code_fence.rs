/// Fenced code block delimiter.
///
/// The same line opens and closes a block. Only a bare fence counts: an info
/// string such as ```` ```rust ```` is ordinary text.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Returns true if the line, ignoring surrounding whitespace, is a fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim() == Self::MARKER
    }
}
