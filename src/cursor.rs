use crate::producer::{Producer,Run};

enum State<R> {
  Active(R),
  Exhausted,
  Closed
}

/// Pull-style handle over one run of a producer.
///
/// Each `next` resumes the run where it was suspended and returns exactly
/// one value. Once the run is over, `next` keeps returning `None`.
/// `close` may be called at any point, any number of times; dropping the
/// cursor closes it.
pub struct Cursor<R: Run> {
  state: State<R>
}

/// Start a fresh run of `producer` and wrap it in a cursor.
pub fn pull<P: Producer>(producer: &P) -> Cursor<P::Run> {
  Cursor::new(producer.start())
}

impl<R: Run> Cursor<R> {

  pub fn new(run: R) -> Self { Cursor { state: State::Active(run) } }

  /// The next value, or `None` if there are no more.
  pub fn next(&mut self) -> Option<R::Item> {
    let run = match &mut self.state {
      State::Active(run) => run,
      _ => return None
    };
    match run.resume() {
      Some(x) => Some(x),
      None => {
        self.release(State::Exhausted);
        None
      }
    }
  }

  /// Tell the run no more values will be requested and release it.
  pub fn close(&mut self) {
    if let State::Active(_) = self.state {
      self.release(State::Closed)
    }
  }

  /// The cursor can not produce any more values.
  pub fn is_closed(&self) -> bool { !matches!(self.state, State::Active(_)) }

  /// The underlying run ended on its own, rather than by `close`.
  pub fn is_exhausted(&self) -> bool {
    matches!(self.state, State::Exhausted)
  }

  fn release(&mut self, end: State<R>) {
    if let State::Active(mut run) = std::mem::replace(&mut self.state, end) {
      run.stop()
    }
  }
}

impl<R: Run> Iterator for Cursor<R> {
  type Item = R::Item;
  fn next(&mut self) -> Option<Self::Item> { Cursor::next(self) }
}

impl<R: Run> Drop for Cursor<R> {
  fn drop(&mut self) { self.close() }
}
