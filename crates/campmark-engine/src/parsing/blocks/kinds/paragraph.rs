/// Paragraph block type (marker struct).
///
/// Paragraphs have no syntax of their own. They are the fallback for any
/// line no other rule claims, blank lines included.
pub struct Paragraph;

impl Paragraph {
    pub fn matches(_line: &str) -> bool {
        true
    }
}
