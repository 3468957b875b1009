use proptest::prelude::*;

use tent::component::Checklist;
use tent::tree::compare_order;
use tent::{decode, Category, MemSource};

fn segment() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..4).prop_map(|parts| parts.join("/"))
}

fn assert_sorted(node: &Category) {
    for pair in node.sub.windows(2) {
        assert_ne!(
            compare_order(pair[0].index, pair[1].index),
            std::cmp::Ordering::Greater
        );
    }
    for pair in node.components.windows(2) {
        assert_ne!(
            compare_order(pair[0].order(), pair[1].order()),
            std::cmp::Ordering::Greater
        );
    }
    node.sub.iter().for_each(assert_sorted);
}

fn assert_unique_children(node: &Category) {
    let mut ids: Vec<&str> = node.sub.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate child under {:?}", node.id);
    node.sub.iter().for_each(assert_unique_children);
}

proptest! {
    #[test]
    fn ensure_is_idempotent(paths in prop::collection::vec(path(), 1..12)) {
        let mut once = Category::root();
        for p in &paths {
            once.ensure(p);
        }
        let count = once.count_categories();
        for p in &paths {
            once.ensure(p);
        }
        prop_assert_eq!(once.count_categories(), count);
        for p in &paths {
            prop_assert!(once.find(p).is_some());
        }
        assert_unique_children(&once);
    }

    #[test]
    fn decoded_tree_is_sorted_and_stable(
        entries in prop::collection::vec((path(), 0u8..4, 0u8..4), 1..16)
    ) {
        let mut items = Vec::new();
        for (n, (dir, cat_index, order)) in entries.iter().enumerate() {
            let prefix = if dir.is_empty() { String::new() } else { format!("{}/", dir) };
            if !dir.is_empty() {
                items.push((format!("{}.category.yml", prefix), format!("index: {}\n", cat_index)));
            }
            items.push((format!("{}c{}.checks", prefix, n), format!("index: {}\nlist: []\n", order)));
        }
        let root = decode(MemSource::from_pairs(items), Vec::new()).unwrap();

        assert_sorted(&root);
        assert_unique_children(&root);
        prop_assert_eq!(root.count_components(), entries.len());

        // Equal orders keep insertion order.
        root.walk(|_, node| {
            let seq: Vec<(f64, usize)> = node
                .components
                .iter()
                .map(|c| {
                    let list = c.downcast_ref::<Checklist>().unwrap();
                    (list.index, list.id[1..].parse::<usize>().unwrap())
                })
                .collect();
            for pair in seq.windows(2) {
                if pair[0].0 == pair[1].0 {
                    assert!(pair[0].1 < pair[1].1);
                }
            }
        });
    }
}
