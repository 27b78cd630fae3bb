use crate::*;

use proptest::prelude::*;
use proptest::sample::Index;

///
/// Generates a tree assembled from a series of DNA-like fragments, along with its expected content
///
fn sequence_tree() -> impl Strategy<Value=(SequenceTree, String)> {
    (0usize..32, prop::collection::vec("[ACGTN]{0,40}", 0..12))
        .prop_map(|(short_threshold, fragments)| {
            let config      = RopeConfig::default().with_short_threshold(short_threshold);
            let expected    = fragments.concat();
            let tree        = fragments.iter()
                .map(|fragment| config.build(fragment))
                .fold(config.empty(), |tree, fragment| tree.concat(&fragment));

            (tree, expected)
        })
}

proptest! {
    #[test]
    fn content_matches_fragments((tree, expected) in sequence_tree()) {
        prop_assert_eq!(tree.to_text(), expected.clone());
        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(tree.chunks().map(|chunk| chunk.len()).sum::<usize>(), tree.len());
    }

    #[test]
    fn substr_of_whole_tree((tree, _) in sequence_tree()) {
        prop_assert_eq!(tree.substr(0, tree.len()).unwrap().to_text(), tree.to_text());
    }

    #[test]
    fn split_partitions_content((tree, expected) in sequence_tree(), pos in any::<Index>()) {
        let pos             = pos.index(tree.len() + 1);
        let (left, right)   = tree.split(pos).unwrap();

        prop_assert_eq!(left.len(), pos);
        prop_assert_eq!(left.to_text() + &right.to_text(), expected.clone());
        prop_assert_eq!(left.concat(&right), tree.clone());
        prop_assert_eq!(tree.to_text(), expected);
    }

    #[test]
    fn concat_joins_content((first, first_text) in sequence_tree(), (second, second_text) in sequence_tree()) {
        let joined = first.concat(&second);

        prop_assert_eq!(joined.to_text(), first_text + &second_text);
        prop_assert_eq!(joined.len(), first.len() + second.len());
    }

    #[test]
    fn substr_matches_slice((tree, expected) in sequence_tree(), start in any::<Index>(), len in any::<Index>()) {
        let start   = start.index(tree.len() + 1);
        let len     = len.index(tree.len() - start + 1);
        let sub     = tree.substr(start, len).unwrap();

        prop_assert_eq!(sub.len(), len);
        prop_assert_eq!(sub.to_text(), &expected[start..(start+len)]);
    }

    #[test]
    fn substr_past_end_is_rejected((tree, _) in sequence_tree(), start in any::<Index>(), extra in 1usize..10) {
        let start = start.index(tree.len() + 1);
        let len   = tree.len() - start + extra;

        prop_assert!(tree.substr(start, len).unwrap_err().is_range_error());
        prop_assert!(tree.split(tree.len() + extra).unwrap_err().is_range_error());
    }

    #[test]
    fn insert_places_content((tree, expected) in sequence_tree(), (insertion, insertion_text) in sequence_tree(), pos in any::<Index>()) {
        let pos     = pos.index(tree.len() + 1);
        let edited  = tree.insert(pos, &insertion).unwrap();

        prop_assert_eq!(edited.to_text(), format!("{}{}{}", &expected[..pos], insertion_text, &expected[pos..]));
        prop_assert_eq!(tree.to_text(), expected);
    }

    #[test]
    fn read_cells_matches_slice((tree, expected) in sequence_tree(), start in any::<Index>(), end in any::<Index>()) {
        let start   = start.index(tree.len() + 1);
        let end     = start + end.index(tree.len() - start + 1);
        let cells   = tree.read_cells(start..end).cloned().collect::<Vec<_>>();

        prop_assert_eq!(cells, expected.as_bytes()[start..end].to_vec());
    }

    #[test]
    fn get_matches_slice((tree, expected) in sequence_tree(), pos in any::<Index>()) {
        let pos = pos.index(tree.len() + 1);

        prop_assert_eq!(tree.get(pos), expected.as_bytes().get(pos).copied());
    }

    #[test]
    fn short_leaves_always_fuse(first in "[ACGT]{0,40}", second in "[ACGT]{0,40}", extra in 0usize..8) {
        let short_threshold = first.len().max(second.len()) + 1 + extra;
        let config          = RopeConfig::default().with_short_threshold(short_threshold);
        let joined          = config.build(&first).concat(&config.build(&second));

        prop_assert!(joined.is_leaf());
        prop_assert_eq!(joined.to_text(), first + &second);
    }
}
