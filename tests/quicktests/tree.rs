use binary_tree::{BinaryTree, Position, TreeError};

use crate::Op;

/// Applies a set of operations to a tree, keeping a list of the positions
/// still alive. Every rejected operation is checked against what the
/// tree looked like before it.
fn do_ops(ops: &[Op], tree: &mut BinaryTree<i8>, live: &mut Vec<Position>) {
    for op in ops {
        if live.is_empty() {
            live.push(tree.add_root(0).unwrap());
        }
        let size = tree.size();
        match *op {
            Op::AddLeft(i, e) => {
                let p = live[i % live.len()];
                let had_left = tree.left(p).unwrap();
                match tree.add_left(p, e) {
                    Ok(child) => live.push(child),
                    Err(err) => {
                        assert_eq!(err, TreeError::ChildAlreadyExists(binary_tree::Side::Left));
                        assert_eq!(tree.left(p).unwrap(), had_left);
                        assert_eq!(tree.size(), size);
                    }
                }
            }
            Op::AddRight(i, e) => {
                let p = live[i % live.len()];
                let had_right = tree.right(p).unwrap();
                match tree.add_right(p, e) {
                    Ok(child) => live.push(child),
                    Err(err) => {
                        assert_eq!(err, TreeError::ChildAlreadyExists(binary_tree::Side::Right));
                        assert_eq!(tree.right(p).unwrap(), had_right);
                        assert_eq!(tree.size(), size);
                    }
                }
            }
            Op::Remove(i) => {
                let at = i % live.len();
                let p = live[at];
                let parent = tree.parent(p).unwrap();
                let child = tree.left(p).unwrap().or(tree.right(p).unwrap());
                match tree.remove(p) {
                    Ok(_) => {
                        live.swap_remove(at);
                        assert_eq!(tree.element(p), Err(TreeError::InvalidPosition));
                        if let Some(child) = child {
                            assert_eq!(tree.parent(child), Ok(parent));
                        }
                    }
                    Err(err) => {
                        assert_eq!(err, TreeError::TwoChildrenNode);
                        assert_eq!(tree.size(), size);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn size_tracks_live_positions(ops: Vec<Op>) -> bool {
    let mut tree = BinaryTree::new();
    let mut live = Vec::new();

    do_ops(&ops, &mut tree, &mut live);
    tree.size() == live.len() && live.iter().all(|&p| tree.element(p).is_ok())
}

#[quickcheck]
fn copy_is_equal(ops: Vec<Op>) -> bool {
    let mut tree = BinaryTree::new();
    let mut live = Vec::new();

    do_ops(&ops, &mut tree, &mut live);
    let copy = tree.copy();
    copy.equal_to(&tree) && copy.height() == tree.height() && copy.size() == tree.size()
}

#[quickcheck]
fn height_bounds(ops: Vec<Op>) -> bool {
    let mut tree = BinaryTree::new();
    let mut live = Vec::new();

    do_ops(&ops, &mut tree, &mut live);
    let height = tree.height();
    let max_depth = live.iter().map(|&p| tree.depth(p).unwrap()).max();

    // Height counts nodes, depth counts edges.
    let deepest_matches = match max_depth {
        None => height == 0,
        Some(depth) => depth + 1 == height,
    };
    deepest_matches && height <= tree.size()
}

#[quickcheck]
fn attach_sums_sizes(left: Vec<i8>, right: Vec<i8>) -> bool {
    let build = |xs: &[i8]| {
        let mut tree = BinaryTree::new();
        let mut last = None;
        for &x in xs {
            last = Some(match last {
                None => tree.add_root(x).unwrap(),
                Some(p) => tree.add_right(p, x).unwrap(),
            });
        }
        tree
    };
    let mut tree = BinaryTree::new();
    let root = tree.add_root(0).unwrap();
    let mut left = build(&left);
    let mut right = build(&right);
    let expected = 1 + left.size() + right.size();

    tree.attach(root, &mut left, &mut right).unwrap();
    tree.size() == expected && left.size() == 0 && right.size() == 0
}
