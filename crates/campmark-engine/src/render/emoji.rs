use std::borrow::Cow;

/// Supported `:name:` shortcodes and their replacements.
pub const SHORTCODES: [(&str, &str); 18] = [
    (":smile:", "😊"),
    (":fire:", "🔥"),
    (":star:", "⭐"),
    (":check:", "✅"),
    (":x:", "❌"),
    (":warning:", "⚠️"),
    (":thumbsup:", "👍"),
    (":thumbsdown:", "👎"),
    (":eyes:", "👀"),
    (":rocket:", "🚀"),
    (":sparkles:", "✨"),
    (":tada:", "🎉"),
    (":100:", "💯"),
    (":thinking:", "🤔"),
    (":clap:", "👏"),
    (":muscle:", "💪"),
    (":brain:", "🧠"),
    (":bug:", "🐛"),
];

/// Replaces every known shortcode, one table entry at a time.
///
/// Adjacent codes share no colon, so `:fire::star:` expands both. Unknown
/// codes are left as written. Borrows when nothing matches.
pub fn expand(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for (code, emoji) in SHORTCODES {
        if out.contains(code) {
            out = Cow::Owned(out.replace(code, emoji));
        }
    }
    out
}
