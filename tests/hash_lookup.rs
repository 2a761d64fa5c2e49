use std::hash::{Hash, Hasher};

use rust_list_processing::processing::{find, find_by_hash};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hashes only by `bucket`, so distinct values can collide on purpose.
#[derive(Debug, PartialEq, Eq)]
struct Bucketed {
    bucket: u8,
    name: &'static str,
}

impl Hash for Bucketed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bucket.hash(state);
    }
}

#[test]
fn find_by_hash_returns_the_element_with_equal_hash() {
    init_logging();
    let values = vec![
        Bucketed { bucket: 1, name: "one" },
        Bucketed { bucket: 2, name: "two" },
    ];
    let probe = Bucketed { bucket: 2, name: "two" };
    assert_eq!(find_by_hash(&values, &probe), Some(&values[1]));
}

#[test]
fn find_by_hash_matches_on_collision_even_when_values_differ() {
    init_logging();
    let values = vec![
        Bucketed { bucket: 7, name: "first" },
        Bucketed { bucket: 7, name: "second" },
    ];
    let probe = Bucketed { bucket: 7, name: "second" };

    // Hash lookup stops at the first colliding element...
    assert_eq!(find_by_hash(&values, &probe).map(|b| b.name), Some("first"));
    // ...whereas an equality predicate finds the real match.
    assert_eq!(find(&values, |b| *b == probe).map(|b| b.name), Some("second"));
}

#[test]
fn find_by_hash_on_absent_or_empty_input_is_none() {
    let absent: Option<Vec<Bucketed>> = None;
    let probe = Bucketed { bucket: 0, name: "zero" };
    assert_eq!(find_by_hash(&absent, &probe), None);
    assert_eq!(find_by_hash(&Vec::<Bucketed>::new(), &probe), None);
}
