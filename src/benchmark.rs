//! A rudimentary timer for benchmark tasks.

use log::*;
use std::io::{Result, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Time taken by a named task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskResult {
    pub name: String,
    pub elapsed: Duration,
}

/// A suite of timed tasks, kept in the order they were first run.
#[derive(Clone, Debug)]
pub struct Benchmark {
    name: String,
    results: Vec<TaskResult>,
    total: Duration,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl Benchmark {
    /// A suite named `Benchmark@<id>`.
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self::named(format!("Benchmark@{}", id))
    }

    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            results: Vec::new(),
            total: Duration::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of the durations of every call to `bench`.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    pub fn get(&self, task_name: &str) -> Option<&TaskResult> {
        self.results.iter().find(|r| r.name == task_name)
    }

    /// Times `task` and records the result under `task_name`.
    ///
    /// Running a name twice replaces its result but keeps its position;
    /// both runs count in the total.
    pub fn bench<F: FnOnce()>(&mut self, task_name: &str, task: F) -> &TaskResult {
        let result = Self::single(task_name, task);
        self.total += result.elapsed;
        info!("{}: {} took {:?}", self.name, task_name, result.elapsed);
        let pos = match self.results.iter().position(|r| r.name == task_name) {
            Some(pos) => {
                self.results[pos] = result;
                pos
            }
            None => {
                self.results.push(result);
                self.results.len() - 1
            }
        };
        &self.results[pos]
    }

    /// Times `task` without recording it.
    pub fn single<F: FnOnce()>(task_name: &str, task: F) -> TaskResult {
        let start = Instant::now();
        task();
        let elapsed = start.elapsed();
        TaskResult {
            name: task_name.to_string(),
            elapsed,
        }
    }

    /// Prints one line per task, then the total.
    pub fn write_report<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{}", self.name)?;
        for r in &self.results {
            writeln!(w, "  {}: {} ns", r.name, r.elapsed.as_nanos())?;
        }
        writeln!(w, "  total: {} ns", self.total.as_nanos())
    }
}
