use crate::{InvariantViolation, TwoFourTree};
use ordered_float::OrderedFloat;

fn insert_and_verify<K: Ord + std::fmt::Debug>(tree: &mut TwoFourTree<K>, key: K) -> Option<K> {
    let previous = tree.insert(key);
    if let Err(err) = tree.verify() {
        panic!("{}", err);
    }
    previous
}

#[test]
fn verify_after_each_step() {
    let mut tree = TwoFourTree::new();
    assert_eq!(tree.verify(), Ok(()));
    for n in vec![5, 3, 7, 6, 1, 2, 9, 8, 10] {
        assert_eq!(insert_and_verify(&mut tree, n), None);
    }
    assert_eq!(tree.len(), 9);
    assert_eq!(
        tree.to_string(),
        "[[[] 1 [] 2 []] 3 [[] 5 []] 6 [[] 7 [] 8 []] 9 [[] 10 []]]"
    );
}

#[test]
fn root_splits_twice() {
    let mut tree = TwoFourTree::new();
    let mut renderings = vec![];
    for n in vec![5, 3, 7, 6, 1, 2, 9, 8, 10, 12, 11, 13] {
        insert_and_verify(&mut tree, n);
        renderings.push(tree.to_string());
    }

    assert_eq!(renderings[0], "[[] 5 []]");
    assert_eq!(renderings[2], "[[] 3 [] 5 [] 7 []]");
    assert_eq!(renderings[3], "[[[] 3 [] 5 []] 6 [[] 7 []]]");
    assert_eq!(
        renderings[11],
        "[[[[] 1 [] 2 []] 3 [[] 5 []] 6 [[] 7 [] 8 []]] 9 [[[] 10 [] 11 []] 12 [[] 13 []]]]"
    );
    assert_eq!(tree.height(), 3);
}

#[test]
fn same_key_twice() {
    let mut tree: TwoFourTree<i32> = (0..10).collect();
    let height = tree.height();

    assert_eq!(insert_and_verify(&mut tree, 42), None);
    let rendered = tree.to_string();
    assert_eq!(insert_and_verify(&mut tree, 42), Some(42));
    assert_eq!(tree.height(), height);
    assert_eq!(tree.to_string(), rendered);
    assert_eq!(tree.len(), 11);
}

#[test]
fn replacement_at_every_depth() {
    // Keys compare by their first field only
    #[derive(Debug, Clone)]
    struct Entry(u32, u32);
    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Entry {}
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut tree: TwoFourTree<Entry> = (0..100).map(|n| Entry(n, 0)).collect();
    for n in 0..100 {
        let previous = insert_and_verify(&mut tree, Entry(n, 1));
        assert_eq!(previous.map(|e| e.1), Some(0), "n={}", n);
    }
    assert_eq!(tree.len(), 100);
    for n in 0..100 {
        assert_eq!(tree.get(&Entry(n, 0)).map(|e| e.1), Some(1));
    }
}

#[test]
fn in_order_keys() {
    // Pi
    let digits = vec![
        31, 41, 59, 26, 53, 58, 97, 93, 23, 84, 62, 64, 33, 83, 27, 95, 2, 88, 41, 97, 16, 93, 99,
        37, 51, 5, 82, 9, 74, 94, 45, 92, 30, 78, 16, 40, 62, 86, 20, 89, 98, 62, 80, 34, 82, 53,
        42, 11, 70, 67, 98, 21, 48, 8, 65, 13, 28, 23, 6, 64, 70, 93, 84, 46, 9, 55, 5, 82, 23, 17,
        25, 35, 94, 8, 12, 84, 81, 11, 74, 50, 28, 41, 2, 70, 19, 38, 52, 11, 5, 55, 96, 44, 62,
        29, 48, 95, 49, 30, 38, 19, 64, 42, 88, 10, 97, 56, 65, 93, 34, 46, 12, 84, 75, 64, 82,
        33, 78, 67, 83, 16, 52, 71, 20, 19, 9, 14, 56, 48, 56, 69, 23, 46, 3, 48, 61, 4, 54, 32,
        66, 48, 21, 33, 93, 60, 72, 60, 24, 91, 41, 27, 37, 24, 58, 70, 6, 60, 63, 15, 58, 81, 74,
        88, 15, 20, 92, 9, 62, 82, 92, 54, 9, 17, 15, 36, 43, 67, 89, 25, 90, 36, 0, 11, 33, 5, 30,
        54, 88, 20, 46, 65, 21, 38, 41, 46, 95, 19, 41, 51, 16, 9, 43, 30, 57, 27, 3, 65, 75, 95,
        91, 95, 30, 92, 18, 61, 17, 38, 19, 32, 61, 17, 93, 10, 51, 18, 54, 80, 74, 46, 23, 79, 96,
        27, 49, 56, 73, 51, 88, 57, 52, 72, 48, 91, 22, 79, 38, 18, 30, 11, 94, 91, 29, 83, 36, 73,
        36, 24, 40, 65, 66, 43, 8, 60, 21, 39, 49, 46, 39, 52, 24, 73, 71, 90, 70, 21, 79, 86, 9,
        43, 70, 27, 70, 53, 92, 17, 17, 62, 93, 17, 67, 52, 38, 46, 74, 81, 84, 67, 66, 94, 5, 13,
        20, 0, 56, 81, 27, 14, 52, 63, 56, 8, 27, 78, 57, 71, 34, 27, 57, 78, 96, 9, 17, 36, 37,
        17, 87, 21, 46, 84, 40, 90, 12, 24, 95, 34, 30, 14, 65, 49, 58, 53, 71, 5, 7, 92, 27, 96,
        89, 25, 89, 23, 54, 20, 19, 95, 61, 12, 12, 90, 21, 96, 8, 64, 3, 44, 18, 15, 98, 13, 62,
        97, 74, 77, 13, 9, 96, 5, 18, 70, 72, 11, 34, 99, 99, 99, 83, 72, 97, 80, 49, 95, 10, 59,
        73, 17, 32, 81, 60, 96, 31, 85, 95, 2, 44, 59, 45, 53, 46, 90, 83, 2, 64, 25, 22, 30, 82,
        53, 34, 46, 85, 3, 52, 61, 93, 11, 88, 17, 10, 10, 0, 31, 37, 83, 87, 52, 88, 65, 87, 53,
        32, 8, 38, 14, 20, 61, 71, 77, 66, 91, 47, 30, 35, 98, 25, 34, 90, 42, 87, 55, 46, 87, 31,
        15, 95, 62, 86, 38, 82, 35, 37, 87, 59, 37, 51, 95, 77, 81, 85, 77, 80, 53, 21, 71, 22, 68,
        6, 61, 30, 1, 92, 78, 76, 61, 11, 95, 90, 92, 16, 42, 1, 98,
    ];

    let mut tree = TwoFourTree::new();
    for &n in &digits {
        insert_and_verify(&mut tree, n);
    }

    let mut expected = digits.clone();
    expected.sort();
    expected.dedup();
    let collected: Vec<i32> = tree.keys_in_order().into_iter().cloned().collect();
    assert_eq!(collected, expected);
    assert_eq!(tree.len(), expected.len());
}

#[test]
fn float_keys() {
    let mut tree = TwoFourTree::new();
    for i in 0..200 {
        let x = ((i * 37) % 200) as f64 / 8.;
        insert_and_verify(&mut tree, OrderedFloat(x));
    }
    assert_eq!(tree.len(), 200);
    assert!(tree.contains(&OrderedFloat(0.125)));
    assert!(!tree.contains(&OrderedFloat(0.1)));
}

#[test]
fn string_keys() {
    let words = "the quick brown fox jumps over the lazy dog and the cat";
    let tree: TwoFourTree<&str> = words.split(' ').collect();
    assert_eq!(tree.verify(), Ok(()));
    assert_eq!(
        tree.keys_in_order(),
        vec![&"and", &"brown", &"cat", &"dog", &"fox", &"jumps", &"lazy", &"over", &"quick", &"the"]
    );
}

#[test]
fn violation_is_an_error() {
    fn check(result: Result<(), InvariantViolation>) -> Result<(), Box<dyn std::error::Error>> {
        result?;
        Ok(())
    }

    let tree: TwoFourTree<u8> = (0..=255).collect();
    assert!(check(tree.verify()).is_ok());
}

#[cfg(feature = "key-generator")]
mod generated {
    use super::*;
    use crate::key_generator::*;
    use std::collections::BTreeSet;

    fn check<T: Iterator<Item = u64>>(gen: T) {
        let mut tree = TwoFourTree::new();
        let mut expected = BTreeSet::new();
        for key in gen {
            assert_eq!(
                insert_and_verify(&mut tree, key),
                expected.replace(key),
                "key={}",
                key
            );
        }
        let collected: Vec<u64> = tree.keys_in_order().into_iter().cloned().collect();
        assert_eq!(collected, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn sequential() {
        for order in vec![
            SequentialOrder::Ascending,
            SequentialOrder::Descending,
            SequentialOrder::ZigZag,
        ] {
            check(SequentialKeys::new(2000, order));
        }
    }

    #[test]
    fn random() {
        check(RandomKeys::new(2000, 500, 17));
        check(RandomKeys::new(2000, 1_000_000, 17));
    }
}
