use std::fmt::{self, Write};

use crate::arena::Arena;

/// Debug printer: one node per line, children indented below their parent.
///
/// ```text
/// 8 black
///   L=5 black
///     L=2 red
///     R=∅
///   R=34 red
/// ```
pub fn print(arena: &Arena, node: Option<u32>) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = render(arena, node, "", "", &mut out);
    out
}

fn render(
    arena: &Arena,
    node: Option<u32>,
    tab: &str,
    label: &str,
    out: &mut String,
) -> fmt::Result {
    match node {
        None => writeln!(out, "{tab}{label}∅"),
        Some(i) => {
            let n = &arena[i];
            writeln!(out, "{tab}{label}{} {}", n.key, n.color)?;
            if n.l.is_none() && n.r.is_none() {
                return Ok(());
            }
            let tab = format!("{tab}  ");
            render(arena, n.l, &tab, "L=", out)?;
            render(arena, n.r, &tab, "R=", out)
        }
    }
}
