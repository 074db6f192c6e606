//! Property-based tests for the indexing engine.
//!
//! These drive random mount and unmount sequences over a flat list of
//! siblings and check the identifiers against a freshly derived path.

use super::{derive_path, Indexer};
use crate::dom::{Document, NodeId};
use crate::IndexerOptions;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Mount { tag: usize, slot: usize },
    Unmount { slot: usize },
}

const TAGS: [&str; 3] = ["div", "span", "li"];

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..TAGS.len(), 0usize..8).prop_map(|(tag, slot)| Action::Mount { tag, slot }),
        (0usize..8).prop_map(|slot| Action::Unmount { slot }),
    ]
}

fn options_strategy() -> impl Strategy<Value = IndexerOptions> {
    (any::<bool>(), prop::sample::select(vec![("[", "]"), (":", ""), ("_", "-")])).prop_map(
        |(force_index, (prefix, suffix))| {
            IndexerOptions::default()
                .with_force_index(force_index)
                .with_index_affixes(prefix, suffix)
        },
    )
}

/// Applies `actions` as a binding layer would: mount inserts a new element at
/// a position, unmount removes then detaches.
fn run(options: &IndexerOptions, actions: &[Action]) -> (Document, Indexer<Document>, NodeId) {
    let mut doc = Document::new();
    let container = doc.create_element("section");
    doc.append_child(doc.body(), container);
    let mut indexer = Indexer::new(options.clone());

    for action in actions {
        let mounted = doc.children_of(container).to_vec();
        match action {
            Action::Mount { tag, slot } => {
                let node = doc.create_element(TAGS[*tag]);
                match mounted.get(*slot) {
                    Some(reference) => doc.insert_before(container, node, *reference),
                    None => doc.append_child(container, node),
                }
                indexer.insert(&mut doc, node);
            }
            Action::Unmount { slot } => {
                if let Some(node) = mounted.get(*slot) {
                    indexer.remove(&mut doc, *node);
                    doc.detach(*node);
                }
            }
        }
    }

    (doc, indexer, container)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Every attached node carries the identifier its live position derives
    #[test]
    fn identifiers_match_live_positions(
        options in options_strategy(),
        actions in prop::collection::vec(action_strategy(), 1..30),
    ) {
        let (doc, indexer, container) = run(&options, &actions);

        for node in doc.children_of(container) {
            let path = derive_path(&doc, &options, *node).unwrap();
            let mut segments = vec![options.anchor.as_str()];
            segments.extend(path.segments.iter().map(String::as_str));
            let expected = options.join(segments);

            prop_assert_eq!(doc.attribute(*node, "data-id"), Some(expected.as_str()));
            prop_assert_eq!(indexer.identifier_of(*node), Some(expected));
        }
    }

    // Recomputing a settled tree changes nothing
    #[test]
    fn recompute_is_idempotent(
        options in options_strategy(),
        actions in prop::collection::vec(action_strategy(), 1..30),
    ) {
        let (mut doc, mut indexer, container) = run(&options, &actions);
        let before: Vec<Option<String>> = doc
            .children_of(container)
            .iter()
            .map(|node| doc.attribute(*node, "data-id").map(str::to_string))
            .collect();
        let shape = indexer.tree().paths();

        indexer.recompute(&mut doc, container);
        indexer.recompute(&mut doc, container);

        let after: Vec<Option<String>> = doc
            .children_of(container)
            .iter()
            .map(|node| doc.attribute(*node, "data-id").map(str::to_string))
            .collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(shape, indexer.tree().paths());
    }

    // Unmounting everything leaves a bare shadow root
    #[test]
    fn unmounting_everything_empties_the_tree(
        options in options_strategy(),
        actions in prop::collection::vec(action_strategy(), 1..30),
    ) {
        let (mut doc, mut indexer, container) = run(&options, &actions);

        while let Some(node) = doc.children_of(container).first().copied() {
            prop_assert!(indexer.remove(&mut doc, node));
            doc.detach(node);
        }

        prop_assert!(indexer.tree().is_empty());
    }
}
