/// A reference to a single document line with its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line index in the document.
    pub index: usize,
    /// The line text, without its `\n` terminator.
    pub text: &'a str,
}

/// Splits a document into lines on `\n`.
///
/// An empty document has no lines. A trailing newline produces a final empty
/// line, so the blank line the author typed survives as an empty paragraph.
pub fn document_lines(document: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let lines = (!document.is_empty()).then(|| document.split('\n'));
    lines
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}
