//! The scry re-evaluation engine.
//!
//! Turns raw editable script text into an ordered, human-readable report of
//! every intermediate value, one pipeline pass per edit:
//!
//! 1. [`rewrite_refs`] — cross-line reference tokens (`${N}`, `$N`) become
//!    synthetic identifiers.
//! 2. [`synthesize`] — lines are classified and assembled into one routine.
//! 3. [`sandbox::run`] — the routine runs in a fresh, isolated interpreter
//!    after the prelude.
//! 4. [`format_value`] — values are rendered with precision-limited
//!    rounding and a lossiness marker.
//! 5. [`Session`] — the edit-driven trigger that reruns 1–4 and publishes.
//!
//! [`evaluate`] is the whole pipeline as one total function: it always
//! returns a [`Snapshot`], collapsing any failure into the reserved
//! single-entry error form.

mod format;
mod rewrite;
pub mod sandbox;
mod session;
mod snapshot;
mod synth;

pub use format::{format_value, LOSSY_MARKER};
pub use rewrite::rewrite_refs;
pub use session::{ReportSink, Session};
pub use snapshot::{ReportEntry, Snapshot, ERROR_KEY};
pub use synth::{synthesize, Routine};

/// Display precision used when the collaborator supplies none.
pub const DEFAULT_PRECISION: u32 = 4;

/// Run one full evaluation cycle.
///
/// Total: every lex, parse, or runtime failure anywhere in prelude or
/// script becomes the single reserved error entry, never a panic and never
/// a partial report.
pub fn evaluate(script: &str, prelude: &str, precision: u32) -> Snapshot {
    let rewritten = rewrite_refs(script);

    let routine = match synthesize(&rewritten) {
        Ok(routine) => routine,
        Err(e) => {
            tracing::debug!(error = %e, "synthesis failed");
            return Snapshot::error(e.to_string());
        }
    };

    match sandbox::run(&routine, prelude) {
        Ok(bindings) => {
            tracing::debug!(
                statements = routine.len(),
                bindings = bindings.len(),
                "evaluation cycle complete"
            );
            Snapshot::from_entries(
                bindings
                    .into_iter()
                    .map(|(key, value)| (key, format_value(&value, precision))),
            )
        }
        Err(e) => {
            tracing::debug!(error = %e, "evaluation cycle failed");
            Snapshot::error(e.to_string())
        }
    }
}
