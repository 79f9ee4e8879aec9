use tracing::trace;

use crate::arena::Arena;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::Color;
use crate::util::{
    color_of, first, get_l, get_p, get_r, is_black, is_red, replace_child, set_color, set_l,
    set_p, set_r,
};

/// Unlinks node `z` from the tree and rebalances.
///
/// Returns the new root and the slot that was physically detached. When `z`
/// has two children its in-order successor is detached instead, after the
/// successor's key has been copied into `z`; the caller owns releasing the
/// returned slot.
pub(crate) fn remove(arena: &mut Arena, root: Option<u32>, z: u32) -> (Option<u32>, u32) {
    let y = match (get_l(arena, z), get_r(arena, z)) {
        (Some(_), Some(r)) => first(arena, Some(r)).expect("right subtree is non-empty"),
        _ => z,
    };

    let x = get_l(arena, y).or(get_r(arena, y));
    let xp = get_p(arena, y);
    if let Some(x) = x {
        set_p(arena, x, xp);
    }
    let mut root = replace_child(arena, root, xp, y, x);

    if y != z {
        arena[z].key = arena[y].key;
    }

    if arena[y].is_black() {
        root = remove_fixup(arena, root, x, xp);
    }

    set_p(arena, y, None);
    set_l(arena, y, None);
    set_r(arena, y, None);
    (root, y)
}

/// Restores equal black height after a black node was spliced out.
///
/// `x` is the position that lost a black node and `parent` is its parent.
/// `x` may be an empty position, which is why the parent travels alongside
/// it instead of being read back through `x`.
fn remove_fixup(
    arena: &mut Arena,
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32> {
    while x != root && is_black(arena, x) {
        let Some(p) = parent else {
            break;
        };

        if get_l(arena, p) == x {
            let mut w = get_r(arena, p).expect("double-black position has a sibling");
            if is_red(arena, Some(w)) {
                trace!(parent = arena[p].key, "remove: case 1, red sibling");
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_left(arena, root, p);
                w = get_r(arena, p).expect("rotation leaves a sibling");
            }

            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                trace!(parent = arena[p].key, "remove: case 2, push deficit up");
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }

            if is_black(arena, get_r(arena, w)) {
                trace!(parent = arena[p].key, "remove: case 3, near nephew red");
                let near = get_l(arena, w).expect("red near nephew exists");
                set_color(arena, near, Color::Black);
                set_color(arena, w, Color::Red);
                root = rotate_right(arena, root, w);
                w = get_r(arena, p).expect("rotation leaves a sibling");
            }

            trace!(parent = arena[p].key, "remove: case 4, far nephew red");
            let far = get_r(arena, w).expect("red far nephew exists");
            set_color(arena, w, color_of(arena, p));
            set_color(arena, p, Color::Black);
            set_color(arena, far, Color::Black);
            root = rotate_left(arena, root, p);
        } else {
            let mut w = get_l(arena, p).expect("double-black position has a sibling");
            if is_red(arena, Some(w)) {
                trace!(parent = arena[p].key, "remove: case 1, red sibling");
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_right(arena, root, p);
                w = get_l(arena, p).expect("rotation leaves a sibling");
            }

            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                trace!(parent = arena[p].key, "remove: case 2, push deficit up");
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }

            if is_black(arena, get_l(arena, w)) {
                trace!(parent = arena[p].key, "remove: case 3, near nephew red");
                let near = get_r(arena, w).expect("red near nephew exists");
                set_color(arena, near, Color::Black);
                set_color(arena, w, Color::Red);
                root = rotate_left(arena, root, w);
                w = get_l(arena, p).expect("rotation leaves a sibling");
            }

            trace!(parent = arena[p].key, "remove: case 4, far nephew red");
            let far = get_l(arena, w).expect("red far nephew exists");
            set_color(arena, w, color_of(arena, p));
            set_color(arena, p, Color::Black);
            set_color(arena, far, Color::Black);
            root = rotate_right(arena, root, p);
        }

        x = root;
        break;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}
