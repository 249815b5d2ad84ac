//! Parallel candidate evaluation.
//!
//! Candidates are dealt round-robin to scoped worker threads. Each
//! worker sends `(rank, matched)` for every trial it runs over a
//! channel; the caller keeps the lowest matching rank. Arrival order on
//! the channel therefore never influences the answer.

use std::thread;

use crossbeam_channel::unbounded;
use rover_core::{Command, Position};

use crate::candidates::CandidateSet;
use crate::error::InferError;
use crate::infer::{InferenceResult, Inferrer};
use crate::sequence::InstructionSequence;

pub(crate) fn search(
    inferrer: &Inferrer,
    sequence: &InstructionSequence,
    unknown_index: usize,
    candidates: &CandidateSet,
    target: Position,
    workers: usize,
) -> Result<InferenceResult, InferError> {
    search_with(candidates, workers, |candidate| {
        inferrer
            .run_trial(sequence, unknown_index, candidate, target)
            .map(|report| report.matches(target))
    })
}

/// Run `trial` for every candidate on up to `workers` threads.
///
/// A worker error or panic fails the whole search, even when another
/// candidate matched.
fn search_with<F>(
    candidates: &CandidateSet,
    workers: usize,
    trial: F,
) -> Result<InferenceResult, InferError>
where
    F: Fn(Command) -> Result<bool, InferError> + Sync,
{
    let workers = workers.clamp(1, candidates.len().max(1));
    let (tx, rx) = unbounded::<Result<(usize, bool), InferError>>();
    let trial = &trial;

    let (best, failure, panicked) = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let tx = tx.clone();
                s.spawn(move || {
                    let ranks = (worker..candidates.len()).step_by(workers);
                    for rank in ranks {
                        let Some(candidate) = candidates.get(rank) else {
                            break;
                        };
                        let sent = trial(candidate).map(|matched| (rank, matched));
                        if tx.send(sent).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();
        // Workers hold the remaining senders; the receive loop ends when
        // the last one finishes.
        drop(tx);

        let mut best: Option<usize> = None;
        let mut failure: Option<InferError> = None;
        for msg in rx.iter() {
            match msg {
                Ok((rank, true)) => best = Some(best.map_or(rank, |b| b.min(rank))),
                Ok((_, false)) => {}
                Err(e) => {
                    failure.get_or_insert(e);
                }
            }
        }

        let panicked = handles
            .into_iter()
            .map(|h| h.join())
            .fold(false, |acc, joined| acc || joined.is_err());
        (best, failure, panicked)
    });

    if panicked {
        tracing::warn!(workers, "trial worker panicked");
        return Err(InferError::WorkerPanicked);
    }
    if let Some(e) = failure {
        return Err(e);
    }
    tracing::debug!(workers, best_rank = ?best, "parallel trials complete");
    Ok(best
        .and_then(|rank| candidates.get(rank))
        .map_or(InferenceResult::NotFound, InferenceResult::Found))
}
