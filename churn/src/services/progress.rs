//! Console progress output
//!
//! Prints one `.` per added set and one `x` per deleted set, with a line
//! per iteration. Output is best-effort: write failures are ignored.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crate::traits::ProgressReporter;
use crate::types::RunSummary;

pub struct ConsoleProgress<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleProgress<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

impl<W: Write + Send> ProgressReporter for ConsoleProgress<W> {
    fn run_started(&self, iterations: u32, count: usize) {
        self.emit(&format!(
            "Beginning test to ensure we can create and destroy the same relationships\niterations: {iterations}, count: {count}\n"
        ));
    }

    fn iteration_started(&self, iteration: u32) {
        self.emit(&format!("iteration {iteration} starting "));
    }

    fn added(&self, _index: usize) {
        self.emit(".");
    }

    fn deleted(&self, _index: usize) {
        self.emit("x");
    }

    fn iteration_done(&self, _iteration: u32) {
        self.emit("done\n");
    }

    fn run_complete(&self, _summary: &RunSummary) {
        self.emit("testing complete\n");
    }
}
