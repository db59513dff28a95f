// ==============================================
// ORDERED KEY STORE SCENARIOS (integration)
// ==============================================
//
// End-to-end call sequences through the public API only. Each module is one
// short story about how the recency chain reacts to a series of calls.

use recencykit::prelude::*;

mod lookup_and_upsert {
    use super::*;

    #[test]
    fn lookup_promotes_key() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.insert(1, 'b');

        assert_eq!(store.get(&0), Some(&'a'));
        assert_eq!(store.least_recent_key(), Some(&1));
    }

    #[test]
    fn upsert_returns_previous_and_promotes() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.insert(1, 'b');

        assert_eq!(store.insert(0, 'c'), Some('a'));
        assert_eq!(store.least_recent_key(), Some(&1));
        assert_eq!(store.peek(&0), Some(&'c'));
    }

    #[test]
    fn fresh_upsert_returns_none() {
        let mut store = OrderedKeyStore::new();
        assert_eq!(store.insert(0, 0), None);
        assert_eq!(store.insert(0, 1), Some(0));
    }

    #[test]
    fn lookup_of_every_key_returns_its_value() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.insert(1, 'b');
        assert_eq!(store.get(&0), Some(&'a'));
        assert_eq!(store.get(&1), Some(&'b'));
    }
}

mod removal {
    use super::*;

    #[test]
    fn removed_key_is_gone_and_store_is_empty() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.remove(&0);

        assert_eq!(store.get(&0), None);
        assert_eq!(store.least_recent_key(), None);
    }

    #[test]
    fn sole_entry_survives_self_promotion() {
        let mut store = OrderedKeyStore::new();
        store.insert('x', 1);
        store.get(&'x');
        store.remove(&'x');

        assert_eq!(store.least_recent_key(), None);
        assert_eq!(store.most_recent_key(), None);
        assert!(store.is_empty());
        assert_eq!(store.check_invariants(), Ok(()));
    }

    #[test]
    fn removing_head_leaves_one_entry() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.insert(1, 'b');
        store.remove(&0);

        assert_eq!(store.least_recent_key(), Some(&1));
        assert_eq!(store.most_recent_key(), Some(&1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn remove_then_insert_other_key() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        store.remove(&0);
        store.insert(1, 'b');

        assert_eq!(store.get(&0), None);
        assert_eq!(store.get(&1), Some(&'b'));
    }

    #[test]
    fn remove_of_absent_key_reports_none() {
        let mut store: OrderedKeyStore<&str, &str> = OrderedKeyStore::new();
        assert_eq!(store.remove("missing"), None);
        store.insert("0", "0");
        assert_eq!(store.remove("0"), Some("0"));
        assert_eq!(store.get("0"), None);
    }
}

mod tail_promotion {
    use super::*;

    #[test]
    fn double_lookup_on_tail_keeps_chain_intact() {
        let mut store = OrderedKeyStore::new();
        store.insert(1, "one");
        store.insert(2, "two");

        assert_eq!(store.get(&2), Some(&"two"));
        assert_eq!(store.get(&2), Some(&"two"));

        let forward: Vec<_> = store.keys().copied().collect();
        let backward: Vec<_> = store.keys().rev().copied().collect();
        assert_eq!(forward, vec![1, 2]);
        assert_eq!(backward, vec![2, 1]);
        assert_eq!(store.check_invariants(), Ok(()));
    }

    #[test]
    fn repeated_upsert_on_tail() {
        let mut store = OrderedKeyStore::new();
        for value in 0..5 {
            store.insert("hot", value);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.peek(&"hot"), Some(&4));
        assert_eq!(store.least_recent_key(), Some(&"hot"));
    }
}

mod host_driven_eviction {
    use super::*;

    #[test]
    fn host_bounds_store_by_removing_least_recent() {
        const LIMIT: usize = 3;
        let mut store = OrderedKeyStore::new();
        let mut evicted = Vec::new();

        for key in 0..6u32 {
            store.insert(key, key * 100);
            if key == 2 {
                store.get(&0);
            }
            while store.len() > LIMIT {
                let lru = *store.least_recent_key().unwrap();
                evicted.push(lru);
                store.remove(&lru);
            }
        }

        assert_eq!(evicted, vec![1, 2, 0]);
        assert_eq!(store.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn trim_to_matches_manual_eviction() {
        let mut manual: OrderedKeyStore<u32, u32> = (0..10).map(|i| (i, i)).collect();
        let mut trimmed = manual.clone();

        while manual.len() > 4 {
            manual.pop_least_recent();
        }
        let evicted = trimmed.trim_to(4);

        assert_eq!(evicted.len(), 6);
        assert_eq!(manual, trimmed);
    }
}
