use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::{self,JoinHandle};
use crossbeam_channel::{bounded,Receiver,Sender};
use tracing::trace;
use crate::producer::{Producer,Run};

/// Push-style code: calls its argument once per value, and returns when the
/// argument returns `false` or there are no more values.
pub type Body<T> = Arc<dyn Fn(&mut dyn FnMut(T) -> bool) + Send + Sync>;

/// A producer defined by push-style code.
///
/// `for_each` calls the body directly. Pulling from it (`start`, `pull`,
/// `zip`) runs the body on a worker thread that is suspended between values.
pub struct Generate<T, F> {
  body: Arc<F>,
  item: PhantomData<fn() -> T>
}

pub fn generate<T, F>(body: F) -> Generate<T, F>
  where
  T: Send + 'static,
  F: Fn(&mut dyn FnMut(T) -> bool) + Send + Sync + 'static
{
  Generate { body: Arc::new(body), item: PhantomData }
}

impl<T, F> Clone for Generate<T, F> {
  fn clone(&self) -> Self {
    Generate { body: self.body.clone(), item: PhantomData }
  }
}

impl<T, F> Producer for Generate<T, F>
  where
  T: Send + 'static,
  F: Fn(&mut dyn FnMut(T) -> bool) + Send + Sync + 'static
{
  type Item = T;
  type Run  = Handoff<T>;

  fn start(&self) -> Self::Run {
    let body: Body<T> = self.body.clone();
    Handoff { state: State::Pending(body) }
  }

  fn for_each<S>(&self, mut step: S)
    where S: FnMut(T) -> bool
  {
    let mut done = false;
    (*self.body)(&mut |x| {
      if done { return false }
      done = !step(x);
      !done
    })
  }
}


// -----------------------------------------------------------------------------
// Suspended worker


/// A run of push-style code, suspended between values on a worker thread.
///
/// The worker is spawned on the first `resume`. Values are handed over on
/// zero capacity channels, and the worker waits for the next `resume` before
/// computing another value, so it never gets ahead of the consumer.
pub struct Handoff<T> {
  state: State<T>
}

enum State<T> {
  Pending(Body<T>),
  Running(Worker<T>),
  Finished
}

struct Worker<T> {
  resume: Sender<()>,
  values: Receiver<T>,
  thread: JoinHandle<()>
}

impl<T: Send + 'static> Worker<T> {

  fn spawn(body: Body<T>) -> Self {
    let (resume_tx, resume_rx) = bounded::<()>(0);
    let (value_tx, value_rx)   = bounded::<T>(0);
    let thread = thread::spawn(move || {
      let mut step = |x: T| {
        if value_tx.send(x).is_err() { return false }
        resume_rx.recv().is_ok()
      };
      (*body)(&mut step);
    });
    trace!(thread = ?thread.thread().id(), "handoff worker started");
    Worker { resume: resume_tx, values: value_rx, thread: thread }
  }

  /// Disconnect both channels and wait for the body to return.
  fn join(self) {
    let Worker { resume, values, thread } = self;
    drop(resume);
    drop(values);
    let id = thread.thread().id();
    match thread.join() {
      Ok(()) => trace!(thread = ?id, "handoff worker finished"),
      Err(panic) =>
        if !thread::panicking() { std::panic::resume_unwind(panic) }
    }
  }
}

impl<T: Send + 'static> Handoff<T> {

  fn receive(&mut self, worker: Worker<T>) -> Option<T> {
    match worker.values.recv() {
      Ok(x) => {
        self.state = State::Running(worker);
        Some(x)
      }
      Err(_) => {
        worker.join();
        None
      }
    }
  }

  /// The worker has been spawned and has not finished yet.
  pub fn is_running(&self) -> bool { matches!(self.state, State::Running(_)) }
}

impl<T: Send + 'static> Run for Handoff<T> {
  type Item = T;

  fn resume(&mut self) -> Option<T> {
    match std::mem::replace(&mut self.state, State::Finished) {
      State::Pending(body) => self.receive(Worker::spawn(body)),
      State::Running(worker) => {
        if worker.resume.send(()).is_err() {
          worker.join();
          return None
        }
        self.receive(worker)
      }
      State::Finished => None
    }
  }

  fn stop(&mut self) {
    if let State::Running(worker) =
                            std::mem::replace(&mut self.state, State::Finished) {
      trace!("stopping handoff worker");
      worker.join()
    }
  }
}

impl<T> Drop for Handoff<T> {
  fn drop(&mut self) {
    if let State::Running(worker) =
                            std::mem::replace(&mut self.state, State::Finished) {
      let Worker { resume, values, thread } = worker;
      drop(resume);
      drop(values);
      let _ = thread.join();
    }
  }
}
