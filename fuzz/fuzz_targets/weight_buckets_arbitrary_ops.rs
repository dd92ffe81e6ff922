#![no_main]

use bucketq::ds::WeightBuckets;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

// Fuzz arbitrary operation sequences on WeightBuckets
//
// Tests random sequences of insert, peek, poll, update, remove, and clear
// against a shadow node -> weight map to find size-accounting and
// bucket-cleanup violations.
fuzz_target!(|data: &[u8]| {
    let mut queue = WeightBuckets::new();
    let mut shadow: HashMap<i32, i32> = HashMap::new();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 6;
        let node = i32::from(data[idx + 1]);
        let weight = i32::from(data[idx + 2]);

        match op {
            0 => {
                if !shadow.contains_key(&node) {
                    assert!(queue.insert(node, weight));
                    shadow.insert(node, weight);
                }
            }
            1 => {
                // Both peeks must agree on emptiness with the shadow map.
                assert_eq!(queue.peek_key().is_some(), !shadow.is_empty());
                assert_eq!(queue.peek_value().is_some(), !shadow.is_empty());
            }
            2 => match queue.poll_key() {
                Some(polled) => {
                    let expected_min = shadow.values().min().copied().unwrap();
                    assert_eq!(shadow.remove(&polled), Some(expected_min));
                }
                None => assert!(shadow.is_empty()),
            },
            3 => {
                if let Some(&old) = shadow.get(&node) {
                    queue.update(node, old, weight).unwrap();
                    shadow.insert(node, weight);
                } else {
                    assert!(queue.update(node, weight, 0).is_err());
                }
            }
            4 => {
                if let Some(old) = shadow.remove(&node) {
                    queue.remove(node, old).unwrap();
                } else {
                    assert!(queue.remove(node, weight).is_err());
                }
            }
            5 => {
                if data[idx + 1] == 0 {
                    queue.clear();
                    shadow.clear();
                }
            }
            _ => unreachable!(),
        }

        // Validate basic bookkeeping after every operation
        assert_eq!(queue.len(), shadow.len());
        assert_eq!(queue.is_empty(), shadow.is_empty());

        idx += 3;
    }
});
