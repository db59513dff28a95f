#![no_main]

use libfuzzer_sys::fuzz_target;
use recencykit::snapshot::BincodeCodec;
use recencykit::store::OrderedKeyStore;

// Feed arbitrary bytes to both import paths.
//
// A rejected import must leave the store unchanged; an accepted one must
// yield a store whose chain passes the invariant check.
fuzz_target!(|data: &[u8]| {
    let mut store: OrderedKeyStore<u16, u16> = (0..8).map(|i| (i, i)).collect();
    let before = store.clone();

    match store.import_with(&BincodeCodec, data) {
        Ok(()) => assert!(store.check_invariants().is_ok()),
        Err(_) => assert_eq!(store, before),
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let mut store: OrderedKeyStore<u16, u16> = (0..8).map(|i| (i, i)).collect();
        match store.import(text) {
            Ok(()) => assert!(store.check_invariants().is_ok()),
            Err(_) => assert_eq!(store, before),
        }
    }
});
