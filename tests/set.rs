use rand::{thread_rng, Rng};
use syncset::{ConcurrentSet, HashSet};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
enum Value {
    Int(i64),
    Str(&'static str),
}

use Value::{Int, Str};

fn abc() -> HashSet<Value> {
    HashSet::from([Int(1), Int(2), Str("test")])
}

#[test]
fn intersection() {
    let a = abc();
    let b = HashSet::from([Int(1), Int(2)]);

    let c = a.intersection(&b);
    assert_eq!(c.len(), 2);
    assert!(c.has(&[Int(1), Int(2)]));
    assert!(!c.contains(&Str("test")));

    // neither operand is touched
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 2);
}

#[test]
fn union() {
    let a = HashSet::from([Int(1), Str("x")]);
    let b = HashSet::from([Int(1), Int(2)]);

    let u = a.union(&b);
    assert_eq!(u, HashSet::from([Int(1), Int(2), Str("x")]));
    assert_eq!(a.union(&b), b.union(&a));
}

#[test]
fn union_with_empty() {
    let a = abc();
    let empty = HashSet::<Value>::new();
    assert_eq!(a.union(&empty), a);
    assert_eq!(empty.union(&a), a);
}

#[test]
fn union_with_self() {
    let a = abc();
    assert_eq!(a.union(&a), a);
    assert_eq!(a.intersection(&a), a);
    assert!(a.difference(&a).is_empty());
}

#[test]
fn is_subset() {
    let a = abc();
    let b = HashSet::from([Int(1), Int(2)]);
    let d = HashSet::from([Int(1), Int(21)]);

    assert!(b.is_subset(&a));
    assert!(!d.is_subset(&a));
    assert!(!a.is_subset(&b));
}

#[test]
fn is_superset() {
    let a = abc();
    let b = HashSet::from([Int(1), Int(2)]);
    let d = HashSet::from([Int(1), Int(21)]);

    assert!(a.is_superset(&b));
    assert!(!a.is_superset(&d));
    assert!(!b.is_superset(&a));
}

#[test]
fn subset_of_empty_set() {
    let empty = HashSet::<Value>::new();
    let a = abc();

    assert!(empty.is_subset(&a));
    assert!(empty.is_subset(&empty));
    assert!(a.is_superset(&empty));
    assert!(!a.is_subset(&empty));
    assert!(!empty.is_superset(&a));
}

#[test]
fn subset_does_not_depend_on_which_value_is_checked_first() {
    // only one value is missing; wherever it lands in iteration order, the answer is the same
    let big: HashSet<u32> = (0..64).collect();
    for missing in 100..164 {
        let small: HashSet<u32> = (0..8).chain(Some(missing)).collect();
        assert!(!small.is_subset(&big));
        assert!(!big.is_superset(&small));
    }
}

#[test]
fn difference() {
    let a = abc();
    let b = HashSet::from([Int(1), Int(2)]);

    let c = b.difference(&a);
    assert!(!c.contains(&Str("test")));
    assert!(!c.contains(&Int(1)));
    assert!(!c.contains(&Int(2)));
    assert!(c.is_empty());

    let c = a.difference(&b);
    assert_eq!(c, HashSet::from([Str("test")]));
}

#[test]
fn written_against_the_trait() {
    fn shared<S: ConcurrentSet<Value>>(a: &S, b: &S) -> Vec<Value> {
        a.intersection(b).to_vec()
    }

    let a = abc();
    let b = HashSet::from([Str("test"), Int(9)]);
    assert_eq!(shared(&a, &b), vec![Str("test")]);
}

fn random_set(rng: &mut impl Rng) -> HashSet<u32> {
    let n = rng.gen_range(0..40);
    (0..n).map(|_| rng.gen_range(0..50)).collect()
}

#[test]
fn uniqueness() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let set = HashSet::new();
        let mut all = std::collections::HashSet::new();
        for _ in 0..rng.gen_range(1..10) {
            let batch: Vec<u32> = (0..rng.gen_range(1..20))
                .map(|_| rng.gen_range(0..30))
                .collect();
            all.extend(batch.iter().copied());
            set.add(batch).unwrap();
        }
        assert_eq!(set.len(), all.len());
        assert!(set.has(&all));
    }
}

#[test]
fn remove_then_not_has() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let set = random_set(&mut rng);
        for v in set.to_vec() {
            let before = set.len();
            set.remove(&[v]).unwrap();
            assert!(!set.contains(&v));
            assert_eq!(set.len(), before - 1);
        }
        assert!(set.is_empty());
    }
}

#[test]
fn union_cardinality() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        assert_eq!(
            a.union(&b).len(),
            a.len() + b.len() - a.intersection(&b).len()
        );
    }
}

#[test]
fn difference_and_intersection_partition() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);

        let only_a = a.difference(&b);
        let both = a.intersection(&b);

        assert!(only_a.intersection(&both).is_empty());
        assert_eq!(only_a.union(&both), a);
        assert!(both.is_subset(&b));
        assert!(a.is_superset(&only_a));
    }
}

#[test]
fn subset_is_reflexive() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let a = random_set(&mut rng);
        assert!(a.is_subset(&a));
        assert!(a.is_superset(&a));
        assert!(HashSet::<u32>::new().is_subset(&a));
    }
}

#[test]
fn clear_resets() {
    let mut rng = thread_rng();
    for _ in 0..50 {
        let a = random_set(&mut rng);
        a.clear();
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
    }
}
