use std::sync::Arc;
use std::sync::atomic::{AtomicBool,AtomicUsize,Ordering};
use num::BigUint;
use proptest::prelude::*;
use crate::{Producer,generate,limit,zip,reduce,reduce_to_vec};
use crate::sources::{fibs,ints_from_to,numbers,numbers_from};

/// Counts from 0, `len` values or forever, recording how many values were
/// computed and whether the loop exited.
fn counted(len: Option<usize>, computed: Arc<AtomicUsize>, exited: Arc<AtomicBool>)
  -> impl Producer<Item = usize>
{
  generate(move |step: &mut dyn FnMut(usize) -> bool| {
    let mut i = 0;
    while len.map_or(true, |n| i < n) {
      computed.fetch_add(1, Ordering::SeqCst);
      if !step(i) { break }
      i += 1;
    }
    exited.store(true, Ordering::SeqCst);
  })
}

proptest! {
  #![proptest_config(ProptestConfig { cases: 64, failure_persistence: None,
                                      .. ProptestConfig::default() })]

  #[test]
  fn sum_of_first_n(n in 0_u64 .. 2000) {
    let sum = reduce(&limit(numbers_from(1_u64), n as usize), 0_u64, |acc, x| {
      *acc += x;
      Ok::<(), ()>(())
    });
    prop_assert_eq!(sum.ok(), Some(n * (n + 1) / 2));
  }

  #[test]
  fn limit_is_exact(len in 0_i32 .. 50, n in 0_usize .. 80) {
    let got    = reduce_to_vec(&limit(ints_from_to(0, len), n));
    let expect: Vec<i32> = (0 .. len).take(n).collect();
    prop_assert_eq!(&got, &expect);

    let pulled: Vec<i32> = limit(ints_from_to(0, len), n).iter().collect();
    prop_assert_eq!(pulled, expect);
  }

  #[test]
  fn limit_stops_infinite_source(n in 0_usize .. 40) {
    let computed = Arc::new(AtomicUsize::new(0));
    let exited   = Arc::new(AtomicBool::new(false));
    let p = limit(counted(None, computed.clone(), exited.clone()), n);
    prop_assert_eq!(p.iter().count(), n);
    prop_assert_eq!(computed.load(Ordering::SeqCst), n);
    prop_assert_eq!(exited.load(Ordering::SeqCst), n > 0);
  }

  #[test]
  fn zip_stops_at_shorter(la in 0_usize .. 30, lb in 0_usize .. 30) {
    let ca = Arc::new(AtomicUsize::new(0));
    let cb = Arc::new(AtomicUsize::new(0));
    let ea = Arc::new(AtomicBool::new(false));
    let eb = Arc::new(AtomicBool::new(false));
    let p = zip( counted(Some(la), ca.clone(), ea.clone())
               , counted(Some(lb), cb.clone(), eb.clone()));
    let got = reduce_to_vec(&p);
    prop_assert_eq!(got.len(), la.min(lb));
    prop_assert!(got.iter().enumerate().all(|(i,&(x,y))| i == x && i == y));
    // A side that started was released, and never ran ahead of the other.
    prop_assert_eq!(ea.load(Ordering::SeqCst), true);
    prop_assert_eq!(eb.load(Ordering::SeqCst), la > 0);
    prop_assert_eq!(cb.load(Ordering::SeqCst), la.min(lb));
  }

  #[test]
  fn zip_early_stop_releases(stop_at in 1_usize .. 20) {
    let ca = Arc::new(AtomicUsize::new(0));
    let cb = Arc::new(AtomicUsize::new(0));
    let ea = Arc::new(AtomicBool::new(false));
    let eb = Arc::new(AtomicBool::new(false));
    let p = zip( counted(None, ca.clone(), ea.clone())
               , counted(None, cb.clone(), eb.clone()));
    let mut seen = 0;
    p.for_each(|_| { seen += 1; seen < stop_at });
    prop_assert_eq!(seen, stop_at);
    prop_assert!(ea.load(Ordering::SeqCst) && eb.load(Ordering::SeqCst));
    prop_assert_eq!(ca.load(Ordering::SeqCst), stop_at);
    prop_assert_eq!(cb.load(Ordering::SeqCst), stop_at);
  }

  #[test]
  fn reduce_short_circuits(k in 1_u64 .. 100) {
    let mut calls = 0;
    let r = reduce(&numbers_from(1_u64), 0_u64, |acc, x| {
      calls += 1;
      if x == k { return Err(x) }
      *acc += x;
      Ok(())
    });
    let halted = r.unwrap_err();
    prop_assert_eq!(calls, k);
    prop_assert_eq!(halted.consumed as u64, k - 1);
    prop_assert_eq!(halted.into_parts(), ((k - 1) * k / 2, k));
  }

  #[test]
  fn fibs_zip_with_index(n in 0_usize .. 150) {
    let fib_list = reduce_to_vec(&limit(fibs(), 200));
    let pairs    = reduce_to_vec(&zip(limit(numbers(), n), limit(fibs(), 200)));
    prop_assert_eq!(pairs.len(), n);
    for (i,f) in pairs {
      prop_assert_eq!(&f, &fib_list[i]);
    }
  }
}

#[test]
fn zip_numbers_with_fibs() {
  let pairs = reduce_to_vec(&zip(limit(numbers(), 150), limit(fibs(), 200)));
  assert_eq!(pairs.len(), 150);
  assert_eq!(pairs[10], (10, BigUint::from(89_u32)));
}
