use std::hash::{BuildHasher, BuildHasherDefault, Hasher};
use syncset::{DefaultHashBuilder, HashSet};

#[derive(Default)]
pub struct ZeroHasher;

#[derive(Clone)]
pub struct ZeroHashBuilder;

impl Hasher for ZeroHasher {
    fn finish(&self) -> u64 {
        0
    }
    fn write(&mut self, _: &[u8]) {}
}

impl BuildHasher for ZeroHashBuilder {
    type Hasher = ZeroHasher;

    fn build_hasher(&self) -> ZeroHasher {
        ZeroHasher
    }
}

fn check<S: BuildHasher + Default + Clone>() {
    let range = if cfg!(miri) { 0..16 } else { 0..1000 };
    let set = HashSet::<i32, S>::default();
    for i in range.clone() {
        set.insert(i);
    }

    assert!(!set.contains(&i32::MIN));
    assert!(!set.contains(&(range.start - 1)));
    for i in range.clone() {
        assert!(set.contains(&i));
    }
    assert!(!set.contains(&range.end));
    assert!(!set.contains(&i32::MAX));

    let evens = HashSet::<i32, S>::default();
    evens.add(range.clone().filter(|i| i % 2 == 0)).unwrap();
    let odds = set.difference(&evens);
    assert_eq!(odds.len(), set.len() - evens.len());
    assert!(odds.read().iter().all(|i| i % 2 != 0));
}

#[test]
fn test_default_hasher() {
    check::<DefaultHashBuilder>();
}

#[test]
fn test_zero_hasher() {
    check::<BuildHasherDefault<ZeroHasher>>();
}

#[test]
fn test_max_hasher() {
    #[derive(Default)]
    struct MaxHasher;

    impl Hasher for MaxHasher {
        fn finish(&self) -> u64 {
            u64::MAX
        }
        fn write(&mut self, _: &[u8]) {}
    }

    check::<BuildHasherDefault<MaxHasher>>();
}
