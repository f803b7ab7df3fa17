use std::ops::Add;
use std::sync::Arc;
use num::{BigUint,One};
use crate::producer::{Producer,Run};


/* Counting */

/// The infinite sequence `start, start + 1, start + 2, ...`
#[derive(Clone,Debug)]
pub struct NumbersFrom<T> { start: T }

pub fn numbers_from<T>(start: T) -> NumbersFrom<T>
  where T: Clone + One + Add<Output = T>
{
  NumbersFrom { start: start }
}

/// Counting from 0.
pub fn numbers() -> NumbersFrom<usize> { numbers_from(0) }

/// `next` is the last value handed out once `started` is set.
#[derive(Clone,Debug)]
pub struct Counting<T> { next: T, started: bool }

impl<T> Producer for NumbersFrom<T>
  where T: Clone + One + Add<Output = T>
{
  type Item = T;
  type Run  = Counting<T>;
  fn start(&self) -> Self::Run {
    Counting { next: self.start.clone(), started: false }
  }
}

impl<T> Run for Counting<T>
  where T: Clone + One + Add<Output = T>
{
  type Item = T;
  fn resume(&mut self) -> Option<T> {
    // Only step past a value once another one is asked for.
    if self.started {
      self.next = self.next.clone() + T::one();
    }
    self.started = true;
    Some(self.next.clone())
  }
}


/* Ranges */

/// The values in `[lo, hi)`, in increasing order.
#[derive(Clone,Debug)]
pub struct IntsFromTo<T> { lo: T, hi: T }

pub fn ints_from_to<T>(lo: T, hi: T) -> IntsFromTo<T>
  where T: Clone + PartialOrd + One + Add<Output = T>
{
  IntsFromTo { lo: lo, hi: hi }
}

#[derive(Clone,Debug)]
pub struct Range<T> { next: T, end: T }

impl<T> Producer for IntsFromTo<T>
  where T: Clone + PartialOrd + One + Add<Output = T>
{
  type Item = T;
  type Run  = Range<T>;
  fn start(&self) -> Self::Run {
    Range { next: self.lo.clone(), end: self.hi.clone() }
  }
}

impl<T> Run for Range<T>
  where T: Clone + PartialOrd + One + Add<Output = T>
{
  type Item = T;
  fn resume(&mut self) -> Option<T> {
    if self.next >= self.end { return None }
    let succ = self.next.clone() + T::one();
    Some(std::mem::replace(&mut self.next, succ))
  }
}


/* Fibonacci */

/// The Fibonacci numbers `1, 1, 2, 3, 5, 8, ...`
#[derive(Clone,Copy,Debug)]
pub struct Fibs;

pub fn fibs() -> Fibs { Fibs }

/// `a` is the next value to yield, `b` the one after it.
#[derive(Clone,Debug)]
pub struct FibsRun { a: BigUint, b: BigUint }

impl Producer for Fibs {
  type Item = BigUint;
  type Run  = FibsRun;
  fn start(&self) -> Self::Run {
    FibsRun { a: BigUint::one(), b: BigUint::one() }
  }
}

impl Run for FibsRun {
  type Item = BigUint;
  fn resume(&mut self) -> Option<BigUint> {
    // The successor is always a new allocation; the yielded value moves out.
    let succ = &self.a + &self.b;
    let b    = std::mem::replace(&mut self.b, succ);
    Some(std::mem::replace(&mut self.a, b))
  }
}


/* Slices */

/// The elements of a vector, in order.
#[derive(Debug)]
pub struct Values<T> { items: Arc<[T]> }

/// The elements of a vector, paired with their index.
#[derive(Debug)]
pub struct All<T> { items: Arc<[T]> }

pub fn values<T: Clone>(items: Vec<T>) -> Values<T> {
  Values { items: items.into() }
}

pub fn all<T: Clone>(items: Vec<T>) -> All<T> { All { items: items.into() } }

impl<T> Clone for Values<T> {
  fn clone(&self) -> Self { Values { items: self.items.clone() } }
}

impl<T> Clone for All<T> {
  fn clone(&self) -> Self { All { items: self.items.clone() } }
}

#[derive(Debug)]
pub struct SliceRun<T> { items: Arc<[T]>, ix: usize }

impl<T> SliceRun<T> {
  fn advance(&mut self) -> Option<(usize,&T)> {
    let i = self.ix;
    let x = self.items.get(i)?;
    self.ix += 1;
    Some((i,x))
  }
}

/// A run over the items of `All`, yielding index/value pairs.
#[derive(Debug)]
pub struct Indexed<T>(SliceRun<T>);

impl<T: Clone> Producer for Values<T> {
  type Item = T;
  type Run  = SliceRun<T>;
  fn start(&self) -> Self::Run { SliceRun { items: self.items.clone(), ix: 0 } }
}

impl<T: Clone> Run for SliceRun<T> {
  type Item = T;
  fn resume(&mut self) -> Option<T> {
    self.advance().map(|(_,x)| x.clone())
  }
}

impl<T: Clone> Producer for All<T> {
  type Item = (usize,T);
  type Run  = Indexed<T>;
  fn start(&self) -> Self::Run {
    Indexed(SliceRun { items: self.items.clone(), ix: 0 })
  }
}

impl<T: Clone> Run for Indexed<T> {
  type Item = (usize,T);
  fn resume(&mut self) -> Option<(usize,T)> {
    self.0.advance().map(|(i,x)| (i,x.clone()))
  }
}
