#![no_main]

use libfuzzer_sys::fuzz_target;
use recencykit::store::OrderedKeyStore;

// Fuzz arbitrary operation sequences on OrderedKeyStore
//
// Mirrors every operation on a Vec model ordered from least to most recent
// and checks both agree after each step.
fuzz_target!(|data: &[u8]| {
    let mut store: OrderedKeyStore<u8, u8> = OrderedKeyStore::new();
    let mut model: Vec<(u8, u8)> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 7;
        let key = pair[1] % 32;

        match op {
            0 | 1 => {
                // insert
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|idx| model.remove(idx).1);
                model.push((key, pair[0]));
                assert_eq!(store.insert(key, pair[0]), expected);
            }
            2 => {
                // get
                let expected = model.iter().position(|(k, _)| *k == key).map(|idx| {
                    let entry = model.remove(idx);
                    model.push(entry);
                    entry.1
                });
                assert_eq!(store.get(&key).copied(), expected);
            }
            3 => {
                // remove
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|idx| model.remove(idx).1);
                assert_eq!(store.remove(&key), expected);
            }
            4 => {
                // pop_least_recent
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(store.pop_least_recent(), expected);
            }
            5 => {
                // peek and contains never reorder
                let before: Vec<u8> = store.keys().copied().collect();
                let _ = store.peek(&key);
                let _ = store.contains(&key);
                let after: Vec<u8> = store.keys().copied().collect();
                assert_eq!(before, after);
            }
            _ => {
                // export then import into a fresh store
                let json = store.export().unwrap();
                let mut restored: OrderedKeyStore<u8, u8> = OrderedKeyStore::new();
                restored.import(&json).unwrap();
                assert_eq!(restored, store);
            }
        }

        assert_eq!(store.least_recent_key(), model.first().map(|(k, _)| k));
        assert_eq!(store.most_recent_key(), model.last().map(|(k, _)| k));
        assert_eq!(store.len(), model.len());
        assert!(store.check_invariants().is_ok());
    }
});
