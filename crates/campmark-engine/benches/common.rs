// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "Patch notes for **v1.2** :rocket:\n\n> Thanks to _everyone_ who reported ==bugs==\n\n- Fixed `jump` height\n    - Also [wall jumps](https://example.com/notes)\n1. Rebalanced ~~lasers~~ swords\n2. New ***boss***\n\n```\nfn jump() {\n    velocity.y = 12.0;\n}\n```\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_dense_inline_line(repeats: usize) -> String {
    "a **b** _c_ ***d*** ~~e~~ ==f== `g` [h](i) ".repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize, width: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let indent = " ".repeat(level * 4);
        for i in 0..width {
            let marker = if i % 2 == 0 { "-" } else { "1." };
            content.push_str(&format!("{indent}{marker} item {i} at **level {level}**\n"));
        }
    }
    content
}
