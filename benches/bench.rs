use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use binary_tree::BinaryTree;

/// A complete tree of `num_nodes` nodes laid out like a heap array, so it is
/// complete, a min-heap, and AVL balanced: the queries have to walk all of it.
fn heap_shaped(num_nodes: usize) -> BinaryTree<i32> {
    let mut tree = BinaryTree::new();
    let mut positions = Vec::with_capacity(num_nodes);
    for i in 0..num_nodes {
        let p = if i == 0 {
            tree.add_root(i as i32).unwrap()
        } else if i % 2 == 1 {
            tree.add_left(positions[(i - 1) / 2], i as i32).unwrap()
        } else {
            tree.add_right(positions[(i - 1) / 2], i as i32).unwrap()
        };
        positions.push(p);
    }
    tree
}

/// Helper to bench a query on a tree.
/// It creates a group for the given name and closure and runs it for various
/// tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&BinaryTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;
        let tree = heap_shaped(num_nodes);

        let id = BenchmarkId::new("heap-shaped", num_nodes);
        group.bench_function(id, |b| {
            b.iter(|| f(black_box(&tree), black_box(largest_element_in_tree)))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });
    bench_helper(c, "is-min-heap", |tree, _| {
        let _heap = black_box(tree.is_min_heap());
    });
    bench_helper(c, "is-avl", |tree, _| {
        let _avl = black_box(tree.is_avl());
    });
    bench_helper(c, "copy", |tree, _| {
        let _copy = black_box(tree.copy());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
