// ==============================================
// EXTERNAL LOCKING (integration)
// ==============================================
//
// The store has no internal synchronization. These tests share it behind a
// host-side mutex and check that the chain stays consistent under contention.

use std::sync::{Arc, Barrier};
use std::thread;

use parking_lot::Mutex;
use recencykit::store::OrderedKeyStore;

#[test]
fn store_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<OrderedKeyStore<String, Vec<u8>>>();
}

#[test]
fn concurrent_mixed_operations_keep_chain_consistent() {
    const THREADS: usize = 4;
    const OPS: u64 = 300;

    let store = Arc::new(Mutex::new(OrderedKeyStore::<u64, u64>::new()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS as u64)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..OPS {
                    let key = (t * 7 + i) % 64;
                    let mut guard = store.lock();
                    match i % 4 {
                        0 | 1 => {
                            guard.insert(key, t);
                        },
                        2 => {
                            guard.get(&key);
                        },
                        _ => {
                            guard.remove(&key);
                        },
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let guard = store.lock();
    assert!(guard.len() <= 64);
    assert_eq!(guard.check_invariants(), Ok(()));
    assert_eq!(guard.iter().count(), guard.len());
}

#[test]
fn host_bounded_store_under_contention() {
    const LIMIT: usize = 16;

    let store = Arc::new(Mutex::new(OrderedKeyStore::<u32, u32>::new()));
    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..200u32 {
                    let mut guard = store.lock();
                    guard.insert(t * 1000 + i, i);
                    while guard.len() > LIMIT {
                        guard.pop_least_recent();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let guard = store.lock();
    assert_eq!(guard.len(), LIMIT);
    assert_eq!(guard.check_invariants(), Ok(()));
}
