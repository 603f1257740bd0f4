use bolero::check;
use spamsum::{compare, hash};

#[test]
fn fuzz_compare_properties() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(left, right)| {
            let (Ok(a), Ok(b)) = (hash(left), hash(right)) else {
                return;
            };

            // =============================================================================
            // RANGE & SYMMETRY
            // =============================================================================
            let forward = compare(&a, &b).expect("generated signatures must parse");
            let backward = compare(&b, &a).expect("generated signatures must parse");
            assert!(forward <= 100, "score out of range: {forward}");
            assert_eq!(forward, backward, "compare is not symmetric");

            // =============================================================================
            // DETERMINISM & IDENTITY
            // =============================================================================
            assert_eq!(compare(&a, &b).ok(), Some(forward));
            assert_eq!(compare(&a, &a).ok(), Some(100));
        });
}

#[test]
fn fuzz_compare_never_panics() {
    check!().with_type::<(String, String)>().for_each(|(a, b)| {
        if let Ok(score) = compare(a, b) {
            assert!(score <= 100);
        }
    });
}
