/// Emphasis delimiters: bold, italic and their combination.
///
/// Both `*` and `_` spellings are accepted for every strength. The longer
/// runs are listed first in the pattern catalogue so that `***x***` is
/// recorded as bold-italic before `**` or `*` get a chance at the same start.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ITALIC_STAR: &'static str = "***";
    pub const BOLD_ITALIC_UNDERSCORE: &'static str = "___";
    pub const BOLD_STAR: &'static str = "**";
    pub const BOLD_UNDERSCORE: &'static str = "__";
    pub const ITALIC_STAR: &'static str = "*";
    pub const ITALIC_UNDERSCORE: &'static str = "_";
}
