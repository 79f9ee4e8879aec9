use tracing::trace;

use crate::arena::Arena;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::Color;
use crate::util::{get_l, get_p, get_r, is_red, set_color, set_l, set_p, set_r};

/// Links the unattached node `n` into the tree below `root` and rebalances.
/// Returns the new root.
///
/// Equal keys descend to the right, so duplicates keep insertion order in an
/// in-order walk.
pub(crate) fn insert(arena: &mut Arena, root: Option<u32>, n: u32) -> Option<u32> {
    let Some(mut curr) = root else {
        set_color(arena, n, Color::Black);
        return Some(n);
    };

    let key = arena[n].key;
    loop {
        let go_left = key < arena[curr].key;
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                set_color(arena, n, Color::Red);
                return insert_fixup(arena, root, n);
            }
        }
    }
}

/// Resolves a red-red edge between `n` and its parent.
fn insert_fixup(arena: &mut Arena, mut root: Option<u32>, mut n: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, n).filter(|&p| is_red(arena, Some(p))) {
        // A red parent is never the root, so the grandparent exists.
        let g = get_p(arena, p).expect("red node has a parent");
        let parent_is_left = get_l(arena, g) == Some(p);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = uncle.filter(|&u| is_red(arena, Some(u))) {
            trace!(key = arena[n].key, "insert: red uncle, recolor");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            if get_p(arena, g).is_none() {
                break;
            }
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        set_color(arena, g, Color::Red);
        root = if parent_is_left {
            if get_r(arena, p) == Some(n) {
                trace!(key = arena[n].key, "insert: left-right rotate");
                set_color(arena, n, Color::Black);
                root = rotate_left(arena, root, p);
            } else {
                trace!(key = arena[n].key, "insert: left-left rotate");
                set_color(arena, p, Color::Black);
            }
            rotate_right(arena, root, g)
        } else {
            if get_l(arena, p) == Some(n) {
                trace!(key = arena[n].key, "insert: right-left rotate");
                set_color(arena, n, Color::Black);
                root = rotate_right(arena, root, p);
            } else {
                trace!(key = arena[n].key, "insert: right-right rotate");
                set_color(arena, p, Color::Black);
            }
            rotate_left(arena, root, g)
        };
        break;
    }
    root
}
