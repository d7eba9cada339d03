/// `[label](url)` link delimiters.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    /// Closes the label and opens the target.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
