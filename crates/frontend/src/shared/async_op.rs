//! Generic wrapper for a mutating backend call: `{status, error, run(input)}`.
//!
//! A second `run` while the first is still pending is refused, so buttons
//! bound to [`AsyncOperation::pending_signal`] can never double-submit.
//! Results that arrive after the owning component was disposed are dropped.

use crate::layout::notifications::Notifications;
use crate::shared::api_utils::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl OpStatus {
    pub fn can_start(&self) -> bool {
        !matches!(self, OpStatus::Pending)
    }
}

type OpFuture<O, E> = Pin<Box<dyn Future<Output = Result<O, E>>>>;

pub struct AsyncOperation<I, O, E = ApiError> {
    pub status: RwSignal<OpStatus>,
    pub error: RwSignal<Option<String>>,
    operation: Arc<dyn Fn(I) -> OpFuture<O, E> + Send + Sync>,
    alive: Arc<AtomicBool>,
    notifications: Option<Notifications>,
}

impl<I, O, E> Clone for AsyncOperation<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            error: self.error,
            operation: Arc::clone(&self.operation),
            alive: Arc::clone(&self.alive),
            notifications: self.notifications,
        }
    }
}

impl<I, O, E> AsyncOperation<I, O, E>
where
    I: 'static,
    O: 'static,
    E: Display + 'static,
{
    /// Must be called inside a component so the operation is tied to its
    /// lifetime.
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }

        Self {
            status: RwSignal::new(OpStatus::Idle),
            error: RwSignal::new(None),
            operation: Arc::new(move |input: I| -> OpFuture<O, E> { Box::pin(operation(input)) }),
            alive,
            notifications: None,
        }
    }

    /// Also push failures to the toast stack.
    pub fn notify_errors(mut self, notifications: Notifications) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn pending_signal(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.get() == OpStatus::Pending)
    }

    pub fn reset(&self) {
        self.status.set(OpStatus::Idle);
        self.error.set(None);
    }

    /// Start the operation. Returns `false` without doing anything if one is
    /// already in flight. `on_success` runs only if the component is still
    /// mounted when the call resolves.
    pub fn run(&self, input: I, on_success: impl FnOnce(O) + 'static) -> bool {
        match self.start(input, on_success) {
            Some(task) => {
                spawn_local(task);
                true
            }
            None => false,
        }
    }

    /// Moves to Pending and builds the task that settles the status, or
    /// `None` while another call is in flight.
    fn start(
        &self,
        input: I,
        on_success: impl FnOnce(O) + 'static,
    ) -> Option<impl Future<Output = ()> + 'static> {
        if !self.status.get_untracked().can_start() {
            log::debug!("operation already in flight; ignoring");
            return None;
        }
        self.status.set(OpStatus::Pending);
        self.error.set(None);

        let future = (self.operation)(input);
        let status = self.status;
        let error = self.error;
        let alive = Arc::clone(&self.alive);
        let notifications = self.notifications;

        Some(async move {
            let result = future.await;
            if !alive.load(Ordering::Relaxed) {
                log::debug!("operation finished after its view was disposed; result dropped");
                return;
            }
            match result {
                Ok(value) => {
                    status.set(OpStatus::Success);
                    on_success(value);
                }
                Err(e) => {
                    let message = e.to_string();
                    log::warn!("operation failed: {}", message);
                    status.set(OpStatus::Error);
                    error.set(Some(message.clone()));
                    if let Some(n) = notifications {
                        n.error(message);
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    type Reply = oneshot::Sender<Result<u32, String>>;

    /// An operation whose single call stays pending until the returned
    /// sender answers. Later calls fail immediately.
    fn pending_operation(calls: Arc<AtomicUsize>) -> (AsyncOperation<(), u32, String>, Reply) {
        let (tx, rx) = oneshot::channel::<Result<u32, String>>();
        let rx = Arc::new(Mutex::new(Some(rx)));
        let op = AsyncOperation::new(move |_: ()| {
            calls.fetch_add(1, Ordering::SeqCst);
            let rx = rx.lock().ok().and_then(|mut slot| slot.take());
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or_else(|_| Err("sender dropped".to_string())),
                    None => Err("already called".to_string()),
                }
            }
        });
        (op, tx)
    }

    #[test]
    fn test_only_pending_blocks_a_new_run() {
        assert!(OpStatus::Idle.can_start());
        assert!(OpStatus::Success.can_start());
        assert!(OpStatus::Error.can_start());
        assert!(!OpStatus::Pending.can_start());
        assert_eq!(OpStatus::default(), OpStatus::Idle);
    }

    #[test]
    fn test_second_run_while_pending_is_refused() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let (op, reply) = pending_operation(Arc::clone(&calls));
            let received = Rc::new(Cell::new(None));

            let task = op.start((), {
                let received = Rc::clone(&received);
                move |v| received.set(Some(v))
            });
            assert!(task.is_some());
            assert_eq!(op.status.get_untracked(), OpStatus::Pending);

            assert!(op.start((), |_| {}).is_none());
            assert_eq!(calls.load(Ordering::SeqCst), 1);

            reply.send(Ok(7)).unwrap();
            block_on(task.unwrap());
            assert_eq!(received.get(), Some(7));
            assert_eq!(op.status.get_untracked(), OpStatus::Success);
        });
    }

    #[test]
    fn test_failure_sets_error_and_allows_retry() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let (op, reply) = pending_operation(Arc::clone(&calls));

            let task = op.start((), |_| panic!("must not succeed")).unwrap();
            reply.send(Err("HTTP 500".to_string())).unwrap();
            block_on(task);

            assert_eq!(op.status.get_untracked(), OpStatus::Error);
            assert_eq!(op.error.get_untracked().as_deref(), Some("HTTP 500"));
            assert!(op.start((), |_| {}).is_some());
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_result_after_dispose_is_dropped() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let succeeded = Rc::new(Cell::new(false));

        let (task, reply) = owner.with(|| {
            let (op, reply) = pending_operation(Arc::clone(&calls));
            let task = op.start((), {
                let succeeded = Rc::clone(&succeeded);
                move |_| succeeded.set(true)
            });
            (task, reply)
        });
        owner.cleanup();

        reply.send(Ok(1)).unwrap();
        block_on(task.unwrap());
        assert!(!succeeded.get());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
