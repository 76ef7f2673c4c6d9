//! Bounded fan-out over large fetch lists.
//!
//! The Pokédex needs well over a thousand detail requests. They are issued
//! in fixed-size batches with a pause between batches so the public API is
//! not flooded. Failed items are logged and dropped.

use crate::Sleeper;
use futures::future::join_all;
use std::cell::Cell;
use std::fmt::Display;
use std::future::Future;
use std::ops::Range;
use std::rc::Rc;

pub const BATCH_SIZE: usize = 50;
pub const BATCH_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total: usize,
    batch_size: usize,
}

impl BatchPlan {
    /// A zero batch size is treated as one.
    #[must_use]
    pub fn new(total: usize, batch_size: usize) -> Self {
        Self {
            total,
            batch_size: batch_size.max(1),
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn batch_count(&self) -> usize {
        self.total.div_ceil(self.batch_size)
    }

    /// Index ranges of each batch, in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.batch_count()).map(move |i| {
            let start = i * self.batch_size;
            start..(start + self.batch_size).min(self.total)
        })
    }
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self::new(0, BATCH_SIZE)
    }
}

/// Shared flag a page flips on unmount so an in-flight load stops.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Hands out request tickets for a selection that can change while its
/// fetch is in flight. Only the most recently issued ticket is current.
#[derive(Debug, Clone, Default)]
pub struct RequestGate(Rc<Cell<u64>>);

impl RequestGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, making every earlier ticket stale.
    #[must_use]
    pub fn issue(&self) -> u64 {
        let ticket = self.0.get().wrapping_add(1);
        self.0.set(ticket);
        ticket
    }

    /// Mark every outstanding ticket stale without starting a request.
    pub fn invalidate(&self) {
        let _ = self.issue();
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T> {
    /// Successful results, in input order.
    pub loaded: Vec<T>,
    pub failed: usize,
    pub cancelled: bool,
}

/// Fetch every input through `fetch`, one batch at a time.
///
/// `on_progress(done, total)` fires after each batch; `done` counts issued
/// requests, failures included. No pause follows the final batch.
pub async fn load_in_batches<I, T, E, F, Fut, S, P>(
    inputs: &[I],
    batch_size: usize,
    fetch: F,
    sleeper: &S,
    cancel: &CancelToken,
    mut on_progress: P,
) -> BatchOutcome<T>
where
    F: Fn(&I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    S: Sleeper + ?Sized,
    P: FnMut(usize, usize),
{
    let plan = BatchPlan::new(inputs.len(), batch_size);
    let mut outcome = BatchOutcome {
        loaded: Vec::with_capacity(inputs.len()),
        failed: 0,
        cancelled: false,
    };
    let last = plan.batch_count().saturating_sub(1);

    for (index, range) in plan.ranges().enumerate() {
        if cancel.is_cancelled() {
            outcome.cancelled = true;
            break;
        }
        let done = range.end;
        let results = join_all(inputs[range.clone()].iter().map(&fetch)).await;
        for (offset, result) in results.into_iter().enumerate() {
            match result {
                Ok(value) => outcome.loaded.push(value),
                Err(err) => {
                    log::warn!("Skipping item {}: {err}", range.start + offset);
                    outcome.failed += 1;
                }
            }
        }
        if cancel.is_cancelled() {
            outcome.cancelled = true;
            break;
        }
        on_progress(done, plan.total());
        if index < last {
            sleeper.sleep_ms(BATCH_DELAY_MS).await;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let gate = RequestGate::new();
        let gen_one = gate.issue();
        let shared = gate.clone();
        let gen_two = shared.issue();
        assert!(!gate.is_current(gen_one));
        assert!(gate.is_current(gen_two));

        gate.invalidate();
        assert!(!shared.is_current(gen_two));
    }

    #[derive(Default)]
    struct RecordingSleeper {
        waits: RefCell<Vec<u32>>,
        cancel_after: Option<(usize, CancelToken)>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep_ms(&self, duration_ms: u32) {
            self.waits.borrow_mut().push(duration_ms);
            if let Some((n, token)) = &self.cancel_after
                && self.waits.borrow().len() >= *n
            {
                token.cancel();
            }
        }
    }

    #[test]
    fn plan_splits_into_ceiling_batches() {
        let plan = BatchPlan::new(120, 50);
        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.ranges().collect::<Vec<_>>(), vec![0..50, 50..100, 100..120]);
        assert_eq!(BatchPlan::new(0, 50).batch_count(), 0);
        assert_eq!(BatchPlan::new(3, 0).batch_count(), 3);
    }

    #[test]
    fn failures_are_dropped_and_order_kept() {
        let inputs: Vec<u32> = (1..=7).collect();
        let sleeper = RecordingSleeper::default();
        let mut progress = Vec::new();
        let outcome = block_on(load_in_batches(
            &inputs,
            3,
            |n: &u32| {
                let n = *n;
                async move { if n % 3 == 0 { Err(format!("boom {n}")) } else { Ok(n * 10) } }
            },
            &sleeper,
            &CancelToken::new(),
            |done, total| progress.push((done, total)),
        ));

        assert_eq!(outcome.loaded, vec![10, 20, 40, 50, 70]);
        assert_eq!(outcome.failed, 2);
        assert!(!outcome.cancelled);
        assert_eq!(progress, vec![(3, 7), (6, 7), (7, 7)]);
        assert_eq!(*sleeper.waits.borrow(), vec![BATCH_DELAY_MS, BATCH_DELAY_MS]);
    }

    #[test]
    fn cancellation_stops_before_the_next_batch() {
        let token = CancelToken::new();
        let sleeper = RecordingSleeper {
            cancel_after: Some((1, token.clone())),
            ..RecordingSleeper::default()
        };
        let calls = RefCell::new(0);
        let inputs = vec![(); 10];
        let outcome = block_on(load_in_batches(
            &inputs,
            4,
            |_: &()| {
                *calls.borrow_mut() += 1;
                async { Ok::<_, String>(()) }
            },
            &sleeper,
            &token,
            |_, _| {},
        ));

        assert!(outcome.cancelled);
        assert_eq!(outcome.loaded.len(), 4);
        assert_eq!(*calls.borrow(), 4);
    }
}
