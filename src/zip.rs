use tracing::trace;
use crate::cursor::{Cursor,pull};
use crate::producer::{Producer,Run};

/// Pairs of values from two producers, advanced in lockstep.
#[derive(Clone,Debug)]
pub struct Zip<A, B> {
  a: A,
  b: B
}

/// Pair up the values of `a` and `b`, stopping at the end of the shorter one.
///
/// Each run pulls from its own cursors over `a` and `b`, asking `a` first and
/// `b` only if `a` had a value, so neither side gets ahead of the other.
/// Both cursors are closed however the run ends.
pub fn zip<A: Producer, B: Producer>(a: A, b: B) -> Zip<A, B> {
  Zip { a: a, b: b }
}

impl<A: Producer, B: Producer> Producer for Zip<A, B> {
  type Item = (A::Item, B::Item);
  type Run  = ZipRun<A::Run, B::Run>;

  fn start(&self) -> Self::Run {
    ZipRun { a: pull(&self.a), b: pull(&self.b), pairs: 0 }
  }
}

/// A run of `Zip`, holding one cursor per side.
pub struct ZipRun<RA: Run, RB: Run> {
  a:     Cursor<RA>,
  b:     Cursor<RB>,
  pairs: usize
}

impl<RA: Run, RB: Run> ZipRun<RA, RB> {

  /// The cursors over the two sides.
  pub fn cursors(&self) -> (&Cursor<RA>, &Cursor<RB>) { (&self.a, &self.b) }

  /// How many pairs have been produced so far.
  pub fn pairs(&self) -> usize { self.pairs }

  fn finish(&mut self, side: &'static str) {
    trace!(pairs = self.pairs, exhausted = side, "zip finished");
    self.stop()
  }
}

impl<RA: Run, RB: Run> Run for ZipRun<RA, RB> {
  type Item = (RA::Item, RB::Item);

  fn resume(&mut self) -> Option<Self::Item> {
    let x = match self.a.next() {
      Some(x) => x,
      None => { self.finish("left"); return None }
    };
    let y = match self.b.next() {
      Some(y) => y,
      None => { self.finish("right"); return None }
    };
    self.pairs += 1;
    Some((x,y))
  }

  fn stop(&mut self) {
    self.a.close();
    self.b.close();
  }
}
