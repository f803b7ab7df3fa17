use std::env::VarError;
use std::io::{self,Write};
use anyhow::{Context,Result};
use tracing::info;
use lazy_seq::*;

/// Settings for the demo, read from the environment.
struct DemoConfig {
  /// How many values the `limit` demos print.
  limit: usize,
  /// How many Fibonacci numbers the last demo pairs with their index.
  fibs:  usize
}

impl DemoConfig {
  fn from_env() -> Result<Self> {
    Ok(DemoConfig {
      limit: var_or("LAZY_SEQ_LIMIT", 3)?,
      fibs:  var_or("LAZY_SEQ_FIBS", 200)?
    })
  }
}

fn var_or(name: &str, default: usize) -> Result<usize> {
  match std::env::var(name) {
    Ok(text) =>
      text.trim().parse()
          .with_context(|| format!("{} is not a count: {:?}", name, text)),
    Err(VarError::NotPresent) => Ok(default),
    Err(err) => Err(err).with_context(|| format!("{} can not be read", name))
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into()))
    .init();

  let config = DemoConfig::from_env()?;
  info!(limit = config.limit, fibs = config.fibs, "configuration loaded");

  let stdout = std::io::stdout();
  demo(&config, &mut stdout.lock())?;
  Ok(())
}

/// Write each value of `p` with `line`, stopping at the first write error.
fn print_all<P, F>(out: &mut dyn Write, p: &P, mut line: F) -> io::Result<()>
  where
  P: Producer,
  F: FnMut(&mut dyn Write, P::Item) -> io::Result<()>
{
  let mut written = Ok(());
  p.for_each(|x| { written = line(&mut *out, x); written.is_ok() });
  written
}

fn demo(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
  let letters = vec!["a","b","c","d"];

  writeln!(out, "limit on iter")?;
  print_all(out, &limit(numbers(), config.limit), |o,i| writeln!(o, "{}", i))?;
  writeln!(out)?;

  writeln!(out, "limit on values")?;
  print_all(out, &limit(values(letters.clone()), config.limit),
            |o,s| writeln!(o, "{}", s))?;
  writeln!(out)?;

  writeln!(out, "limit2 on all")?;
  print_all(out, &limit2(all(letters.clone()), config.limit),
            |o,(i,s)| writeln!(o, "{} {}", i, s))?;
  writeln!(out)?;

  writeln!(out, "zip")?;
  print_all(out, &zip(numbers(), values(letters)),
            |o,(i,s)| writeln!(o, "{} {}", i, s))?;
  writeln!(out)?;

  writeln!(out, "fibs")?;
  print_all(out, &zip(numbers(), limit(fibs(), config.fibs)),
            |o,(i,f)| writeln!(o, "{} {}", i, f))
}
