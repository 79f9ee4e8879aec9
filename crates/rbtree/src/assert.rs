use crate::arena::Arena;
use crate::error::InvariantViolation;
use crate::util::{first, get_l, get_p, get_r, is_red, next};

/// Checks every structural invariant of the tree below `root`.
///
/// On success returns the black height of the tree, counting the root and
/// excluding the empty positions below the leaves.
pub fn assert_red_black_tree(
    arena: &Arena,
    root: Option<u32>,
) -> Result<usize, InvariantViolation> {
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent);
    }
    if !arena[root].is_black() {
        return Err(InvariantViolation::RedRoot);
    }

    let height = black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev = None;
    while let Some(i) = curr {
        let key = arena[i].key;
        if let Some(prev) = prev {
            if prev > key {
                return Err(InvariantViolation::OrderViolated { prev, next: key });
            }
        }
        prev = Some(key);
        curr = next(arena, i);
    }

    Ok(height)
}

fn black_height(arena: &Arena, node: Option<u32>) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };
    let key = arena[node].key;
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    for child in [l, r].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(InvariantViolation::BrokenParentLink { key });
        }
    }

    if !arena[node].is_black() && (is_red(arena, l) || is_red(arena, r)) {
        return Err(InvariantViolation::RedRed { key });
    }

    let left = black_height(arena, l)?;
    let right = black_height(arena, r)?;
    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { key, left, right });
    }

    Ok(left + usize::from(arena[node].is_black()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, RbNode};
    use crate::util::{set_l, set_p, set_r};

    fn triple(colors: [Color; 3]) -> (Arena, u32) {
        let mut arena = Arena::new();
        let [l, m, r] = [1, 2, 3].map(|k| arena.alloc(RbNode::new(k)).index());
        for (i, c) in [l, m, r].into_iter().zip(colors) {
            arena[i].color = c;
        }
        set_l(&mut arena, m, Some(l));
        set_r(&mut arena, m, Some(r));
        set_p(&mut arena, l, Some(m));
        set_p(&mut arena, r, Some(m));
        (arena, m)
    }

    #[test]
    fn accepts_balanced_tree() {
        let (arena, m) = triple([Color::Red, Color::Black, Color::Red]);
        assert_eq!(assert_red_black_tree(&arena, Some(m)), Ok(1));
        assert_eq!(assert_red_black_tree(&arena, None), Ok(0));
    }

    #[test]
    fn rejects_red_root() {
        let (arena, m) = triple([Color::Black, Color::Red, Color::Black]);
        assert_eq!(
            assert_red_black_tree(&arena, Some(m)),
            Err(InvariantViolation::RedRoot)
        );
    }

    #[test]
    fn rejects_black_height_mismatch() {
        let (arena, m) = triple([Color::Black, Color::Black, Color::Red]);
        assert_eq!(
            assert_red_black_tree(&arena, Some(m)),
            Err(InvariantViolation::BlackHeightMismatch {
                key: 2,
                left: 1,
                right: 0
            })
        );
    }

    #[test]
    fn rejects_red_red_edge() {
        let (mut arena, m) = triple([Color::Red, Color::Black, Color::Red]);
        let l = get_l(&arena, m).unwrap();
        let extra = arena.alloc(RbNode::new(0)).index();
        set_l(&mut arena, l, Some(extra));
        set_p(&mut arena, extra, Some(l));
        assert_eq!(
            assert_red_black_tree(&arena, Some(m)),
            Err(InvariantViolation::RedRed { key: 1 })
        );
    }

    #[test]
    fn rejects_out_of_order_keys() {
        let (mut arena, m) = triple([Color::Red, Color::Black, Color::Red]);
        let l = get_l(&arena, m).unwrap();
        arena[l].key = 9;
        assert_eq!(
            assert_red_black_tree(&arena, Some(m)),
            Err(InvariantViolation::OrderViolated { prev: 9, next: 2 })
        );
    }
}
