/// Code span inline type with owned delimiter constant.
///
/// Markers inside a code span are shown literally: once the span is accepted,
/// anything overlapping it is dropped.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
