use sieve::{BloomFilter, FilterError};

#[test]
fn end_to_end_dictionary_scenario() {
    let dictionary = ["apple", "banana"];
    let mut filter = BloomFilter::new(dictionary.len(), 100).unwrap();

    // n=2, m=100: k = floor(50 * ln 2) = 34.
    assert_eq!(filter.hash_count(), 34);

    for item in dictionary {
        filter.add(item).unwrap();
    }

    assert!(filter.check("apple").unwrap());
    assert!(filter.check("banana").unwrap());
    // SeaHash is deterministic, so this known non-colliding probe always
    // misses at least one of its 34 bits.
    assert!(!filter.check("zzzz-not-present").unwrap());
}

#[test]
fn no_false_negatives_across_shapes() {
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ];
    for array_size in [64, 256, 1024, 4096] {
        let mut filter = BloomFilter::new(words.len(), array_size).unwrap();
        for word in words {
            filter.add(word).unwrap();
        }
        for word in words {
            assert!(
                filter.check(word).unwrap(),
                "{word} lost from {array_size}-bit filter"
            );
        }
    }
}

#[test]
fn degenerate_shapes_are_rejected() {
    assert!(matches!(
        BloomFilter::new(100, 1),
        Err(FilterError::ZeroHashCount { .. })
    ));
    assert!(matches!(
        BloomFilter::new(0, 1024),
        Err(FilterError::EmptyDictionary)
    ));
}

#[test]
fn stats_survive_heavy_use() {
    let mut filter = BloomFilter::new(50, 2048).unwrap();
    let k = filter.hash_count();
    let fp = filter.false_positive_rate();

    for i in 0..50 {
        filter.add(&format!("word-{i}")).unwrap();
    }
    for i in 0..200 {
        filter.check(&format!("probe-{i}")).unwrap();
    }

    assert_eq!(filter.hash_count(), k);
    assert_eq!(filter.false_positive_rate(), fp);
}

#[test]
fn bit_array_accumulates_monotonically() {
    let mut filter = BloomFilter::new(10, 512).unwrap();
    let mut previous = 0;
    for i in 0..10 {
        filter.add(&format!("item-{i}")).unwrap();
        let ones = filter.bit_array().count_ones();
        assert!(ones >= previous, "set bits shrank after insert {i}");
        previous = ones;
    }
    assert!(previous > 0);
    assert_eq!(filter.bit_array().len(), 512);
}
