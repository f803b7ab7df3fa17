use std::convert::Infallible;
use thiserror::Error;
use tracing::debug;
use crate::producer::Producer;

/// A `reduce` that stopped because its combine step failed.
#[derive(Debug,Error)]
#[error("reduce halted after {consumed} values: {error}")]
pub struct Halted<U, E> {
  /// What the combine step failed with.
  pub error:    E,

  /// The accumulator, as the failing combine step left it.
  pub partial:  U,

  /// How many values were combined successfully.
  pub consumed: usize
}

impl<U, E> Halted<U, E> {
  pub fn into_parts(self) -> (U, E) { (self.partial, self.error) }
}

/// Combine all values of `src` into `initial`, in order.
///
/// The first failing `combine` stops the producer; the failure is returned
/// together with the accumulator at that point.
pub fn reduce<P, U, E, F>(src: &P, initial: U, mut combine: F)
  -> Result<U, Halted<U, E>>
  where
  P: Producer,
  F: FnMut(&mut U, P::Item) -> Result<(), E>
{
  let mut acc      = initial;
  let mut consumed = 0;
  let mut failure  = None;
  src.for_each(|x| match combine(&mut acc, x) {
    Ok(())  => { consumed += 1; true }
    Err(e) => { failure = Some(e); false }
  });
  match failure {
    None => Ok(acc),
    Some(error) => {
      debug!(consumed, "reduce halted");
      Err(Halted { error: error, partial: acc, consumed: consumed })
    }
  }
}

/// All values of `src`, in the order they were produced.
pub fn reduce_to_vec<P: Producer>(src: &P) -> Vec<P::Item> {
  let collected = reduce(src, Vec::new(), |acc, x| {
    acc.push(x);
    Ok::<(), Infallible>(())
  });
  match collected {
    Ok(xs) => xs,
    Err(halted) => match halted.error {}
  }
}
