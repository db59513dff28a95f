// ==============================================
// SNAPSHOT EXPORT / IMPORT (integration)
// ==============================================
//
// Export on one store, import on another, and check that the restored store
// behaves exactly like the original under further operations.

use recencykit::prelude::*;

fn populated() -> OrderedKeyStore<String, u64> {
    let mut store = OrderedKeyStore::new();
    for (i, name) in ["alpha", "beta", "gamma", "delta"].into_iter().enumerate() {
        store.insert(name.to_string(), i as u64);
    }
    store.get("beta");
    store
}

mod round_trip {
    use super::*;

    #[test]
    fn set_dump_load_get() {
        let mut store = OrderedKeyStore::new();
        store.insert(0, 'a');
        let dumped = store.export().unwrap();
        store.import(&dumped).unwrap();
        assert_eq!(store.get(&0), Some(&'a'));
    }

    #[test]
    fn json_preserves_values_and_order() {
        let store = populated();
        let json = store.export().unwrap();

        let mut restored = OrderedKeyStore::new();
        restored.import(&json).unwrap();

        assert_eq!(restored, store);
        assert_eq!(restored.least_recent_key().map(String::as_str), Some("alpha"));
        assert_eq!(restored.most_recent_key().map(String::as_str), Some("beta"));
    }

    #[test]
    fn bincode_preserves_values_and_order() {
        let store = populated();
        let bytes = store.export_with(&BincodeCodec).unwrap();

        let mut restored = OrderedKeyStore::new();
        restored.import_with(&BincodeCodec, &bytes).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn pretty_json_imports_like_compact() {
        let store = populated();
        let pretty = store.export_with(&JsonCodec::pretty()).unwrap();

        let mut restored = OrderedKeyStore::new();
        restored.import(&pretty).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn restored_store_is_a_deep_copy() {
        let mut store = populated();
        let json = store.export().unwrap();
        let mut restored: OrderedKeyStore<String, u64> = OrderedKeyStore::new();
        restored.import(&json).unwrap();

        store.insert("alpha".to_string(), 999);
        store.remove("gamma");

        assert_eq!(restored.peek("alpha"), Some(&0));
        assert!(restored.contains("gamma"));
        assert_eq!(restored.least_recent_key().map(String::as_str), Some("alpha"));
    }

    #[test]
    fn operations_after_import_match_original() {
        let mut original = populated();
        let json = original.export().unwrap();
        let mut restored: OrderedKeyStore<String, u64> = OrderedKeyStore::new();
        restored.import(&json).unwrap();

        for store in [&mut original, &mut restored] {
            store.get("gamma");
            store.remove("alpha");
            store.insert("epsilon".to_string(), 4);
        }

        assert_eq!(original, restored);
        assert_eq!(restored.check_invariants(), Ok(()));
    }

    #[test]
    fn keys_that_encode_as_null_survive_json() {
        let mut store: OrderedKeyStore<Option<u32>, &str> = OrderedKeyStore::new();
        store.insert(Some(1), "one");
        store.insert(None, "nothing");
        store.insert(Some(2), "two");
        store.get(&None::<u32>);

        let json = store.export().unwrap();
        let mut restored: OrderedKeyStore<Option<u32>, String> = OrderedKeyStore::new();
        restored.import(&json).unwrap();

        let order: Vec<_> = restored.iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(order, vec![(Some(1), "one"), (Some(2), "two"), (None, "nothing")]);
        assert_eq!(restored.most_recent_key(), Some(&None));
        assert_eq!(restored.check_invariants(), Ok(()));
    }

    #[test]
    fn unit_key_survives_json() {
        let mut store: OrderedKeyStore<(), u8> = OrderedKeyStore::new();
        store.insert((), 7);

        let json = store.export().unwrap();
        let mut restored: OrderedKeyStore<(), u8> = OrderedKeyStore::new();
        restored.import(&json).unwrap();
        assert_eq!(restored, store);
        assert_eq!(restored.least_recent_key(), Some(&()));
    }

    #[test]
    fn non_finite_floats_need_bincode() {
        let mut store: OrderedKeyStore<u32, f64> = OrderedKeyStore::new();
        store.insert(1, f64::INFINITY);
        store.insert(2, 0.5);

        let json = store.export().unwrap();
        let mut via_json: OrderedKeyStore<u32, f64> = OrderedKeyStore::new();
        assert!(matches!(via_json.import(&json), Err(SnapshotError::Corrupt(_))));
        assert!(via_json.is_empty());

        let bytes = store.export_with(&BincodeCodec).unwrap();
        let mut via_bincode: OrderedKeyStore<u32, f64> = OrderedKeyStore::new();
        via_bincode.import_with(&BincodeCodec, &bytes).unwrap();
        assert_eq!(via_bincode, store);
    }

    #[test]
    fn snapshot_round_trips_through_owned_form() {
        let store = populated();
        let json = serde_json::to_string(&store.snapshot()).unwrap();
        let owned: Snapshot<String, u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(owned.len(), 4);
        let rebuilt = OrderedKeyStore::from_snapshot(owned).unwrap();
        assert_eq!(rebuilt, store);
    }
}

mod corrupt_input {
    use super::*;

    fn assert_rejected_and_unchanged(raw: &str) {
        let mut store = populated();
        let before = store.clone();
        let err = store.import(raw).unwrap_err();
        assert!(matches!(err, SnapshotError::Corrupt(_)), "unexpected error: {err}");
        assert_eq!(store, before);
    }

    #[test]
    fn not_json() {
        assert_rejected_and_unchanged("definitely not a snapshot");
    }

    #[test]
    fn wrong_shape() {
        assert_rejected_and_unchanged(r#"[1, 2, 3]"#);
    }

    #[test]
    fn dangling_next_link() {
        assert_rejected_and_unchanged(
            r#"{"head":["a"],"tail":["a"],"entries":[{"key":"a","value":1,"prev":[],"next":["zz"]}]}"#,
        );
    }

    #[test]
    fn duplicate_keys() {
        assert_rejected_and_unchanged(
            r#"{"head":["a"],"tail":["a"],"entries":[
                {"key":"a","value":1,"prev":[],"next":[]},
                {"key":"a","value":2,"prev":[],"next":[]}]}"#,
        );
    }

    #[test]
    fn self_referencing_entry() {
        assert_rejected_and_unchanged(
            r#"{"head":["a"],"tail":["b"],"entries":[
                {"key":"a","value":1,"prev":[],"next":["a"]},
                {"key":"b","value":2,"prev":["a"],"next":[]}]}"#,
        );
    }

    #[test]
    fn unreachable_entry() {
        assert_rejected_and_unchanged(
            r#"{"head":["a"],"tail":["a"],"entries":[
                {"key":"a","value":1,"prev":[],"next":[]},
                {"key":"b","value":2,"prev":[],"next":[]}]}"#,
        );
    }

    #[test]
    fn missing_link_field() {
        assert_rejected_and_unchanged(
            r#"{"head":["a"],"tail":["a"],"entries":[{"key":"a","value":1,"next":[]}]}"#,
        );
    }

    #[test]
    fn nullable_link_field() {
        assert_rejected_and_unchanged(
            r#"{"head":"a","tail":"a","entries":[{"key":"a","value":1,"prev":null,"next":null}]}"#,
        );
    }

    #[test]
    fn truncated_bincode() {
        let mut store = populated();
        let before = store.clone();
        let bytes = store.export_with(&BincodeCodec).unwrap();
        let err = store
            .import_with(&BincodeCodec, &bytes[..bytes.len() - 3])
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Corrupt(_)));
        assert_eq!(store, before);
    }
}
