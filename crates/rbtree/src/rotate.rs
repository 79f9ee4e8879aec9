//! Rotation primitives. Colours are never touched here.
//!
//! ```text
//!      px                 px
//!      |                  |
//!      x     left ->      y
//!     / \                / \
//!    a   y   <- right   x   c
//!       / \            / \
//!      b   c          a   b
//! ```

use crate::arena::Arena;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Rotates `x` down to the left around its right child. Returns the root.
///
/// `x` must have a right child.
pub(crate) fn rotate_left(arena: &mut Arena, root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let b = get_l(arena, y);
    let px = get_p(arena, x);

    set_r(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }

    set_p(arena, y, px);
    let root = replace_child(arena, root, px, x, Some(y));

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Rotates `x` down to the right around its left child. Returns the root.
///
/// `x` must have a left child.
pub(crate) fn rotate_right(arena: &mut Arena, root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_l(arena, x).expect("rotate_right requires a left child");
    let b = get_r(arena, y);
    let px = get_p(arena, x);

    set_l(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }

    set_p(arena, y, px);
    let root = replace_child(arena, root, px, x, Some(y));

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}
