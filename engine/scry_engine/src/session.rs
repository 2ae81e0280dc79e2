//! Edit-driven re-evaluation: the session and its dirty flag.

use crate::{evaluate, Snapshot};

/// Collaborator that receives each cycle's formatted snapshot.
pub trait ReportSink {
    fn publish(&mut self, snapshot: &Snapshot);
}

/// Blanket impl so a closure can serve as a sink.
impl<F: FnMut(&Snapshot)> ReportSink for F {
    fn publish(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// An edit-driven inspection session.
///
/// Owns the current script text, the prelude and precision configuration,
/// and the latest snapshot. Construction runs one cycle against the
/// initial content; every [`edit`](Session::edit) runs exactly one more
/// per pending change. Cycles are strictly serialized: the dirty flag is
/// drained in a loop, so edits recorded while a cycle ran (e.g. queued by
/// the sink) coalesce into a single follow-up cycle.
pub struct Session<S: ReportSink> {
    script: String,
    prelude: String,
    precision: u32,
    dirty: bool,
    snapshot: Snapshot,
    sink: S,
}

impl<S: ReportSink> Session<S> {
    /// Start a session and run the initial evaluation cycle.
    pub fn new(script: impl Into<String>, prelude: impl Into<String>, precision: u32, sink: S) -> Self {
        let mut session = Session {
            script: script.into(),
            prelude: prelude.into(),
            precision,
            dirty: true,
            snapshot: Snapshot::from_entries(vec![]),
            sink,
        };
        session.drain();
        session
    }

    /// Notify the session of an edit: replace the script and re-evaluate.
    pub fn edit(&mut self, script: impl Into<String>) {
        self.script = script.into();
        self.dirty = true;
        self.drain();
    }

    /// New precision, effective from the next cycle.
    pub fn set_precision(&mut self, precision: u32) {
        self.precision = precision;
    }

    /// New prelude, effective from the next cycle.
    pub fn set_prelude(&mut self, prelude: impl Into<String>) {
        self.prelude = prelude.into();
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Run cycles until the dirty flag stays clear. One cycle per pending
    /// change; never skipped, merged beyond single-slot coalescing, or
    /// queued further.
    fn drain(&mut self) {
        while self.dirty {
            self.dirty = false;
            self.snapshot = evaluate(&self.script, &self.prelude, self.precision);
            self.sink.publish(&self.snapshot);
        }
    }
}
