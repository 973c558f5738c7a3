//! Delivering typed results to completion callbacks.
//!
//! A completion is invoked exactly once with a fully formed [`TypedResult`].
//! There is no separate "maybe an error" parameter and no way to signal the
//! absence of a result.

use std::{any::type_name, fmt};

use tokio::{
    sync::oneshot,
    task::{self, JoinHandle},
};
use tracing::{debug, error};

use crate::{
    division::{divide, DivisionFailure},
    exts::ResultExt as _,
    typed_result::{FailureKind, TypedResult},
};

type Handler<V, E> = Box<dyn FnOnce(TypedResult<V, E>) + Send + 'static>;

/// Deliver `result` to `handler`, synchronously and exactly once.
pub fn to_completion<V, E, F>(result: TypedResult<V, E>, handler: F)
where
    E: FailureKind,
    F: FnOnce(TypedResult<V, E>),
{
    debug!(tag = ?result.tag(), failure_kind = type_name::<E>(), "delivering result");
    handler(result);
}

/// A single-shot completion handler that can be moved to another task or
/// thread.
///
/// [`Completion::complete`] consumes the handle, so it can't fire twice.
/// Dropping a handle that never fired is a bug in the producer and gets
/// logged.
pub struct Completion<V, E: FailureKind> {
    handler: Option<Handler<V, E>>,
}

impl<V, E: FailureKind> Completion<V, E> {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnOnce(TypedResult<V, E>) + Send + 'static,
    {
        Self {
            handler: Some(Box::new(handler)),
        }
    }

    pub fn complete(mut self, result: TypedResult<V, E>) {
        if let Some(handler) = self.handler.take() {
            to_completion(result, handler);
        }
    }
}

impl<V, E: FailureKind> fmt::Debug for Completion<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.handler.is_some())
            .finish()
    }
}

impl<V, E: FailureKind> Drop for Completion<V, E> {
    fn drop(&mut self) {
        if self.handler.is_some() {
            error!(
                failure_kind = type_name::<E>(),
                "completion dropped without being invoked"
            );
        }
    }
}

/// Run `op` on the blocking pool and deliver its result to `handler`.
///
/// # Panics
///
/// Panics if called outside of a tokio runtime.
pub fn spawn_with_completion<V, E, Op, F>(op: Op, handler: F) -> JoinHandle<()>
where
    V: Send + 'static,
    E: FailureKind + Send,
    Op: FnOnce() -> TypedResult<V, E> + Send + 'static,
    F: FnOnce(TypedResult<V, E>) + Send + 'static,
{
    let completion = Completion::new(handler);
    task::spawn_blocking(move || completion.complete(op()))
}

/// [`divide`] run through [`spawn_with_completion`].
pub fn divide_with_completion<F>(x: i64, y: i64, handler: F) -> JoinHandle<()>
where
    F: FnOnce(TypedResult<i64, DivisionFailure>) + Send + 'static,
{
    spawn_with_completion(move || divide(x, y), handler)
}

/// Await the result of a callback-style operation.
///
/// `start` receives the [`Completion`] the operation must fire. An operation
/// that drops it instead breaks the exactly-once contract, and that is treated
/// as a bug rather than a failure.
///
/// # Panics
///
/// Panics if the completion is dropped without being invoked.
pub async fn from_completion<V, E, S>(start: S) -> TypedResult<V, E>
where
    V: Send + 'static,
    E: FailureKind + Send,
    S: FnOnce(Completion<V, E>),
{
    let (tx, rx) = oneshot::channel();

    start(Completion::new(move |result| {
        if tx.send(result).is_err() {
            debug!("completion fired after the receiver went away");
        }
    }));

    match rx.await {
        Ok(result) => result,
        Err(_) => panic!(
            "completion for {} was dropped without being invoked",
            type_name::<E>()
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    #[test]
    fn to_completion_invokes_once_with_identical_value() {
        let direct = divide(10, 5);
        let mut seen = Vec::new();
        to_completion(divide(10, 5), |result| seen.push(result));
        assert_eq!(seen, vec![direct]);

        let direct = divide(10, 0);
        let mut seen = Vec::new();
        to_completion(divide(10, 0), |result| seen.push(result));
        assert_eq!(seen, vec![direct]);
    }

    #[test]
    fn completion_fires_on_complete() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(None));

        let completion = {
            let calls = Arc::clone(&calls);
            let seen = Arc::clone(&seen);
            Completion::new(move |result| {
                calls.fetch_add(1, Ordering::SeqCst);
                *seen.lock().unwrap() = Some(result);
            })
        };
        assert_eq!(format!("{completion:?}"), "Completion { pending: true }");

        completion.complete(divide(9, 3));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), Some(Ok(3)));
    }

    #[test]
    fn dropped_completion_never_fires() {
        let calls = Arc::new(AtomicUsize::new(0));
        let completion: Completion<i64, DivisionFailure> = {
            let calls = Arc::clone(&calls);
            Completion::new(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };
        drop(completion);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn divide_with_completion_delivers_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let calls = Arc::clone(&calls);
            let seen = Arc::clone(&seen);
            divide_with_completion(10, 0, move |result| {
                calls.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(result);
            })
        };
        handle.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Err(DivisionFailure::ZeroDivisor)]
        );
    }

    #[tokio::test]
    async fn from_completion_bridges_spawned_work() {
        let result = from_completion(|completion| {
            divide_with_completion(-7, 2, move |result| completion.complete(result));
        })
        .await;
        assert_eq!(result, Ok(-3));
    }

    #[tokio::test]
    async fn from_completion_accepts_synchronous_delivery() {
        let result = from_completion(|completion| completion.complete(divide(1, 0))).await;
        assert_eq!(result, Err(DivisionFailure::ZeroDivisor));
    }

    #[tokio::test]
    #[should_panic(expected = "dropped without being invoked")]
    async fn from_completion_panics_when_completion_is_dropped() {
        let _: TypedResult<i64, DivisionFailure> = from_completion(drop).await;
    }
}
