/// Implemented by every AST node that can be written as target source.
///
/// Implementations append to `out` and never fail: the node types form a
/// closed set and each of them has a fixed rendering.
pub trait Generate {
    fn generate_into(&self, out: &mut String);
}

/// Generates the target source for `node`.
///
/// The output depends only on the node, so generating the same tree twice
/// yields the same text.
pub fn generate<N: Generate + ?Sized>(node: &N) -> String {
    let mut out = String::new();
    node.generate_into(&mut out);
    out
}

/// Writes `items` separated by a bare comma.
pub fn generate_comma_separated<N: Generate>(items: &[N], out: &mut String) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        item.generate_into(out);
    }
}
