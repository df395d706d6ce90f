//! Confirm-then-delete flow behind the Delete button of a list row.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::{
    error::{ClientError, MutationFailure},
    graphql::DeletedRecord,
    notify::{Notification, Notifier},
    table::ListRecord,
};

#[async_trait(?Send)]
pub trait DeleteMutation {
    async fn delete(&self, id: i64) -> Result<DeletedRecord, MutationFailure>;
}

/// Reloads the list query so the deleted row disappears.
#[async_trait(?Send)]
pub trait QueryRefetch {
    async fn refetch(&self) -> Result<(), ClientError>;
}

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Confirming { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted { id: i64 },
    Failed(MutationFailure),
}

pub struct DeleteWorkflow<R, M, Q, N> {
    mutation: M,
    refetch: Q,
    notifier: N,
    state: DeleteState,
    record: PhantomData<fn() -> R>,
}

impl<R, M, Q, N> DeleteWorkflow<R, M, Q, N>
where
    R: ListRecord,
    M: DeleteMutation,
    Q: QueryRefetch,
    N: Notifier,
{
    pub fn new(mutation: M, refetch: Q, notifier: N) -> Self {
        Self {
            mutation,
            refetch,
            notifier,
            state: DeleteState::Idle,
            record: PhantomData,
        }
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn confirm_message(id: i64) -> String {
        format!("Are you sure you want to delete {} {id}?", R::MODEL_NAME)
    }

    /// Starts confirming deletion of `id` and returns the question to ask.
    pub fn request(&mut self, id: i64) -> String {
        self.state = DeleteState::Confirming { id };
        Self::confirm_message(id)
    }

    pub fn cancel(&mut self) -> DeleteOutcome {
        if let DeleteState::Confirming { id } = self.state {
            tracing::debug!("Deletion of {} {id} cancelled", R::MODEL_NAME);
        }
        self.state = DeleteState::Idle;
        DeleteOutcome::Cancelled
    }

    /// Runs the mutation for the id being confirmed. On success the list is
    /// refetched before the success notification goes out. On failure only an
    /// error notification is sent.
    pub async fn confirm(&mut self) -> DeleteOutcome {
        let DeleteState::Confirming { id } = self.state else {
            return DeleteOutcome::Cancelled;
        };
        self.state = DeleteState::Idle;

        tracing::info!("Deleting {} {id}", R::MODEL_NAME);

        match self.mutation.delete(id).await {
            Ok(deleted) => {
                if let Err(err) = self.refetch.refetch().await {
                    tracing::warn!("Refetch after deleting {} {id} failed: {err}", R::MODEL_NAME);
                }
                self.notifier
                    .notify(Notification::success(format!("{} deleted", R::DISPLAY_NAME)));
                DeleteOutcome::Deleted { id: deleted.id }
            }
            Err(failure) => {
                tracing::warn!("Failed to delete {} {id}: {failure}", R::MODEL_NAME);
                self.notifier.notify(Notification::error(failure.message.clone()));
                DeleteOutcome::Failed(failure)
            }
        }
    }

    /// Asks `prompt` and deletes `id` if the answer is yes.
    pub async fn run(&mut self, id: i64, prompt: &impl ConfirmPrompt) -> DeleteOutcome {
        let message = self.request(id);
        if prompt.confirm(&message) {
            self.confirm().await
        } else {
            self.cancel()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::{notify::NotificationKind, trips_on_users::TripsOnUsers};

    #[derive(Default)]
    struct MockMutation {
        calls: RefCell<Vec<i64>>,
        failure: Option<&'static str>,
    }

    #[async_trait(?Send)]
    impl<'a> DeleteMutation for &'a MockMutation {
        async fn delete(&self, id: i64) -> Result<DeletedRecord, MutationFailure> {
            self.calls.borrow_mut().push(id);
            match self.failure {
                Some(message) => Err(MutationFailure::new(message)),
                None => Ok(DeletedRecord { id }),
            }
        }
    }

    #[derive(Default)]
    struct MockRefetch {
        calls: Cell<usize>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl<'a> QueryRefetch for &'a MockRefetch {
        async fn refetch(&self) -> Result<(), ClientError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(ClientError::Network("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        sent: RefCell<Vec<Notification>>,
    }

    impl<'a> Notifier for &'a MockNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }

    struct Answer(bool);

    impl ConfirmPrompt for Answer {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    type Workflow<'a> = DeleteWorkflow<TripsOnUsers, &'a MockMutation, &'a MockRefetch, &'a MockNotifier>;

    #[test]
    fn request_moves_to_confirming() {
        let (mutation, refetch, notifier) = <(MockMutation, MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        assert_eq!(workflow.state(), DeleteState::Idle);
        let message = workflow.request(12);
        assert_eq!(message, "Are you sure you want to delete tripsOnUsers 12?");
        assert_eq!(workflow.state(), DeleteState::Confirming { id: 12 });
    }

    #[test]
    fn declining_does_nothing() {
        let (mutation, refetch, notifier) = <(MockMutation, MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        let outcome = block_on(workflow.run(5, &Answer(false)));

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(workflow.state(), DeleteState::Idle);
        assert!(mutation.calls.borrow().is_empty());
        assert_eq!(refetch.calls.get(), 0);
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn successful_delete_refetches_and_notifies_once() {
        let (mutation, refetch, notifier) = <(MockMutation, MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        let outcome = block_on(workflow.run(5, &Answer(true)));

        assert_eq!(outcome, DeleteOutcome::Deleted { id: 5 });
        assert_eq!(workflow.state(), DeleteState::Idle);
        assert_eq!(*mutation.calls.borrow(), vec![5]);
        assert_eq!(refetch.calls.get(), 1);
        assert_eq!(*notifier.sent.borrow(), vec![Notification::success("TripsOnUsers deleted")]);
    }

    #[test]
    fn failed_delete_reports_error_without_refetch() {
        let mutation = MockMutation {
            failure: Some("Network error"),
            ..Default::default()
        };
        let (refetch, notifier) = <(MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        let outcome = block_on(workflow.run(8, &Answer(true)));

        assert_eq!(outcome, DeleteOutcome::Failed(MutationFailure::new("Network error")));
        assert_eq!(workflow.state(), DeleteState::Idle);
        assert_eq!(refetch.calls.get(), 0);

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::Error);
        assert!(sent[0].message.contains("Network error"));
    }

    /// Records how many notifications were already out when the refetch ran.
    struct OrderedRefetch<'a> {
        notifier: &'a MockNotifier,
        sent_at_refetch: Cell<Option<usize>>,
    }

    #[async_trait(?Send)]
    impl<'a, 'b> QueryRefetch for &'b OrderedRefetch<'a> {
        async fn refetch(&self) -> Result<(), ClientError> {
            self.sent_at_refetch.set(Some(self.notifier.sent.borrow().len()));
            Ok(())
        }
    }

    #[test]
    fn refetch_completes_before_success_notification() {
        let (mutation, notifier) = <(MockMutation, MockNotifier)>::default();
        let refetch = OrderedRefetch {
            notifier: &notifier,
            sent_at_refetch: Cell::new(None),
        };
        let mut workflow: DeleteWorkflow<TripsOnUsers, _, _, _> =
            DeleteWorkflow::new(&mutation, &refetch, &notifier);

        let outcome = block_on(workflow.run(4, &Answer(true)));

        assert_eq!(outcome, DeleteOutcome::Deleted { id: 4 });
        assert_eq!(refetch.sent_at_refetch.get(), Some(0));
        assert_eq!(notifier.sent.borrow().len(), 1);
    }

    #[test]
    fn refetch_failure_still_counts_as_deleted() {
        let refetch = MockRefetch {
            fail: true,
            ..Default::default()
        };
        let (mutation, notifier) = <(MockMutation, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        let outcome = block_on(workflow.run(3, &Answer(true)));

        assert_eq!(outcome, DeleteOutcome::Deleted { id: 3 });
        assert_eq!(refetch.calls.get(), 1);
        assert_eq!(notifier.sent.borrow()[0].kind, NotificationKind::Success);
    }

    #[test]
    fn confirm_while_idle_is_a_no_op() {
        let (mutation, refetch, notifier) = <(MockMutation, MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        assert_eq!(block_on(workflow.confirm()), DeleteOutcome::Cancelled);
        assert!(mutation.calls.borrow().is_empty());
    }

    #[test]
    fn cancel_after_request_returns_to_idle() {
        let (mutation, refetch, notifier) = <(MockMutation, MockRefetch, MockNotifier)>::default();
        let mut workflow: Workflow = DeleteWorkflow::new(&mutation, &refetch, &notifier);

        workflow.request(1);
        assert_eq!(workflow.cancel(), DeleteOutcome::Cancelled);
        assert_eq!(workflow.state(), DeleteState::Idle);
        assert!(notifier.sent.borrow().is_empty());
    }
}
