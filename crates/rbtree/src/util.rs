//! Link accessors and in-order navigation over an [`Arena`].
//!
//! All functions take slot indices, not [`NodeId`](crate::NodeId)s: handle
//! validation happens once at the [`RbTree`](crate::RbTree) boundary.

use crate::arena::Arena;
use crate::types::Color;

#[inline]
pub(crate) fn get_p(arena: &Arena, i: u32) -> Option<u32> {
    arena[i].p
}

#[inline]
pub(crate) fn get_l(arena: &Arena, i: u32) -> Option<u32> {
    arena[i].l
}

#[inline]
pub(crate) fn get_r(arena: &Arena, i: u32) -> Option<u32> {
    arena[i].r
}

#[inline]
pub(crate) fn set_p(arena: &mut Arena, i: u32, v: Option<u32>) {
    arena[i].p = v;
}

#[inline]
pub(crate) fn set_l(arena: &mut Arena, i: u32, v: Option<u32>) {
    arena[i].l = v;
}

#[inline]
pub(crate) fn set_r(arena: &mut Arena, i: u32, v: Option<u32>) {
    arena[i].r = v;
}

#[inline]
pub(crate) fn set_color(arena: &mut Arena, i: u32, color: Color) {
    arena[i].color = color;
}

#[inline]
pub(crate) fn color_of(arena: &Arena, i: u32) -> Color {
    arena[i].color
}

/// Effectively black: absent positions count as black.
#[inline]
pub(crate) fn is_black(arena: &Arena, i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i].is_black())
}

#[inline]
pub(crate) fn is_red(arena: &Arena, i: Option<u32>) -> bool {
    !is_black(arena, i)
}

/// Points `parent`'s link that currently holds `old` at `new`. With no
/// parent, `new` becomes the root and is returned.
pub(crate) fn replace_child(
    arena: &mut Arena,
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match parent {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// Leftmost node under `root`.
pub fn first(arena: &Arena, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last(arena: &Arena, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next(arena: &Arena, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev(arena: &Arena, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size(arena: &Arena, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height(arena: &Arena, root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}
