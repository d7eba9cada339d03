/// Strikethrough (`~~x~~`) delimiter.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static str = "~~";
}

/// Highlight (`==x==`) delimiter.
pub struct Highlight;

impl Highlight {
    pub const EQUALS: &'static str = "==";
}
