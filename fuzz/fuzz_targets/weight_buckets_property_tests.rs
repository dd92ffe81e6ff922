#![no_main]

use bucketq::ds::WeightBuckets;
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for WeightBuckets
//
// Tests specific invariants and properties:
// - Monotone ordering (polls see non-decreasing weights)
// - Size conservation across decrease-key
// - Bucket cleanup (emptied weights disappear from the index)
// - Set-add insert semantics
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 4;

    match test_type {
        0 => test_monotone_drain(&data[1..]),
        1 => test_update_conserves_size(&data[1..]),
        2 => test_bucket_cleanup(&data[1..]),
        3 => test_insert_is_set_add(&data[1..]),
        _ => unreachable!(),
    }
});

// Property: repeatedly polling until empty sees non-decreasing weights
fn test_monotone_drain(data: &[u8]) {
    let mut queue = WeightBuckets::new();

    for (node, chunk) in data.chunks(2).enumerate() {
        if chunk.len() < 2 {
            break;
        }
        queue.insert(node as i32, i32::from(chunk[1]));
    }

    let mut last_weight = None;
    while let Some(weight) = queue.peek_value() {
        if let Some(prev) = last_weight {
            assert!(weight >= prev);
        }
        last_weight = Some(weight);
        queue.poll_key().unwrap();
    }

    assert!(queue.is_empty());
}

// Property: update moves a membership without changing len
fn test_update_conserves_size(data: &[u8]) {
    if data.len() < 2 {
        return;
    }

    let mut queue = WeightBuckets::new();
    let node = i32::from(data[0]);
    let mut current = i32::from(data[1]);
    queue.insert(node, current);

    for &byte in &data[2..] {
        let next = i32::from(byte);
        queue.update(node, current, next).unwrap();
        current = next;

        assert_eq!(queue.len(), 1);
        assert!(queue.contains(node, current));
        assert_eq!(queue.peek_value(), Some(current));
    }
}

// Property: the weight of an emptied bucket is absent from the index
fn test_bucket_cleanup(data: &[u8]) {
    let mut queue = WeightBuckets::new();

    for (node, &byte) in data.iter().enumerate() {
        queue.insert(node as i32, i32::from(byte));
    }

    while let Some(weight) = queue.peek_value() {
        let before = queue.len();
        queue.poll_key().unwrap();
        assert_eq!(queue.len(), before - 1);

        // Either the bucket still holds members, or its weight is gone.
        if queue.contains_weight(weight) {
            assert_eq!(queue.peek_value(), Some(weight));
        } else {
            assert!(queue.peek_value().is_none_or(|min| min > weight));
        }
    }
}

// Property: re-inserting a live membership never grows the queue
fn test_insert_is_set_add(data: &[u8]) {
    let mut queue = WeightBuckets::new();

    for chunk in data.chunks(2) {
        if chunk.len() < 2 {
            break;
        }
        let node = i32::from(chunk[0]);
        let weight = i32::from(chunk[1]);

        let before = queue.len();
        let grew = queue.insert(node, weight);
        if grew {
            assert_eq!(queue.len(), before + 1);
        } else {
            assert_eq!(queue.len(), before);
            assert!(queue.contains(node, weight));
        }
    }
}
