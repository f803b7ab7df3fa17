use tracing::trace;
use crate::producer::{Producer,Run};

/// At most `count` values of `source`.
#[derive(Clone,Debug)]
pub struct Limit<P> {
  source: P,
  count:  usize
}

/// The first `count` values of `source`, or all of them if there are fewer.
/// The source is stopped as soon as the last value is delivered, so this
/// also terminates infinite producers.
pub fn limit<P: Producer>(source: P, count: usize) -> Limit<P> {
  Limit { source: source, count: count }
}

/// `limit` for producers of key/value pairs.
pub fn limit2<K, V, P>(source: P, count: usize) -> Limit<P>
  where P: Producer<Item = (K,V)>
{
  limit(source, count)
}

impl<P: Producer> Producer for Limit<P> {
  type Item = P::Item;
  type Run  = LimitRun<P::Run>;

  fn start(&self) -> Self::Run {
    LimitRun {
      run:  if self.count > 0 { Some(self.source.start()) } else { None },
      left: self.count
    }
  }

  fn for_each<F>(&self, mut step: F)
    where F: FnMut(Self::Item) -> bool
  {
    if self.count == 0 { return }
    let mut left = self.count;
    self.source.for_each(|x| {
      left -= 1;
      if !step(x) { return false }
      if left == 0 {
        trace!(count = self.count, "limit reached, stopping source");
        return false
      }
      true
    })
  }
}

/// A run of `Limit`. `run` is `None` once the source has been stopped.
pub struct LimitRun<R> {
  run:  Option<R>,
  left: usize
}

impl<R: Run> Run for LimitRun<R> {
  type Item = R::Item;

  fn resume(&mut self) -> Option<R::Item> {
    let x = self.run.as_mut()?.resume();
    match x {
      Some(_) => {
        self.left -= 1;
        if self.left == 0 {
          trace!("limit reached, stopping source");
          self.stop()
        }
      }
      None => self.stop()
    }
    x
  }

  fn stop(&mut self) {
    if let Some(mut run) = self.run.take() { run.stop() }
  }
}
