//! Randomized comparison of `SeqVec` against `Vec` as the reference model.

use seqvec::SeqVec;
use seqvec_testkit::{Op, random_ops};

fn apply(seq: &mut SeqVec<u64>, model: &mut Vec<u64>, op: Op) {
    match op {
        Op::Push(value) => {
            let full = seq.len() == seq.capacity();
            let expected_capacity = (2 * seq.len()).max(1);
            seq.push(value);
            model.push(value);
            if full {
                assert_eq!(seq.capacity(), expected_capacity);
            }
        }
        Op::Pop => {
            assert_eq!(seq.pop(), model.pop());
        }
        Op::Insert { position, value } => {
            let index = Op::insert_index(position, model.len());
            assert_eq!(seq.insert(index, value), index);
            model.insert(index, value);
        }
        Op::Erase { position } => {
            if let Some(index) = Op::erase_index(position, model.len()) {
                assert_eq!(seq.erase(index), index);
                model.remove(index);
            }
        }
        Op::Resize(len) => {
            let capacity = seq.capacity();
            seq.resize(len);
            model.resize(len, 0);
            if len <= capacity {
                assert_eq!(seq.capacity(), capacity);
            } else {
                assert_eq!(seq.capacity(), len);
            }
        }
        Op::Reserve(capacity) => {
            let before = seq.capacity();
            seq.reserve(capacity);
            assert_eq!(seq.capacity(), before.max(capacity));
        }
        Op::Truncate(len) => {
            seq.truncate(len);
            model.truncate(len);
        }
        Op::Clear => {
            let capacity = seq.capacity();
            seq.clear();
            model.clear();
            assert_eq!(seq.capacity(), capacity);
        }
    }
}

#[test]
fn test_random_ops_match_vec() {
    for seed in 0..32 {
        let mut seq = SeqVec::new();
        let mut model = Vec::new();
        for op in random_ops(seed, 2000) {
            apply(&mut seq, &mut model, op);
            assert!(seq.len() <= seq.capacity(), "seed {seed}, op {op:?}");
            assert_eq!(seq, model, "seed {seed}, op {op:?}");
        }
        let copy = seq.clone();
        assert_eq!(copy.capacity(), seq.capacity());
        assert_eq!(copy.into_vec(), model);
    }
}

#[test]
fn test_at_agrees_with_index() {
    let mut rng = fastrand::Rng::with_seed(7);
    let seq: SeqVec<u64> = (0..100).map(|_| rng.u64(..)).collect();
    for _ in 0..200 {
        let i = rng.usize(0..150);
        match seq.at(i) {
            Ok(value) => assert_eq!(*value, seq[i]),
            Err(e) => {
                assert!(i >= seq.len());
                assert!(e.is_out_of_range());
            }
        }
    }
}
