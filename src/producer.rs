use crate::cursor::Cursor;

/// One in-flight execution of a producer, suspended between values.
pub trait Run {
  type Item;

  /// Advance by exactly one value.
  /// Returns `None` once the sequence is over; callers do not resume again
  /// after that.
  fn resume(&mut self) -> Option<Self::Item>;

  /// No further values will be requested.
  /// Release whatever the run holds. May be called after exhaustion,
  /// and more than once.
  fn stop(&mut self) {}
}

/// A restartable description of a (possibly infinite) sequence.
///
/// Every call to `start` or `for_each` is an independent run from the
/// beginning of the sequence; producers do not share state between runs.
pub trait Producer {
  type Item;
  type Run: Run<Item = Self::Item>;

  /// Begin a fresh run, suspended before its first value.
  fn start(&self) -> Self::Run;

  /// Push values into `step` until it returns `false` or the sequence ends.
  /// `step` is never called again after it returns `false`.
  fn for_each<F>(&self, mut step: F)
    where F: FnMut(Self::Item) -> bool
  {
    let mut run = self.start();
    while let Some(x) = run.resume() {
      if !step(x) { break }
    }
    run.stop()
  }

  /// Pull the values of a fresh run one at a time.
  fn iter(&self) -> Cursor<Self::Run> { Cursor::new(self.start()) }
}

impl<P: Producer> Producer for &P {
  type Item = P::Item;
  type Run  = P::Run;

  fn start(&self) -> Self::Run { (**self).start() }

  fn for_each<F>(&self, step: F)
    where F: FnMut(Self::Item) -> bool
  {
    (**self).for_each(step)
  }
}

/// Producers of key/value pairs, driven with a two argument step.
pub trait PairProducer<K,V> : Producer<Item = (K,V)> {
  fn for_each2<F>(&self, mut step: F)
    where F: FnMut(K,V) -> bool
  {
    self.for_each(|(k,v)| step(k,v))
  }
}

impl<K, V, P: Producer<Item = (K,V)>> PairProducer<K,V> for P {}
