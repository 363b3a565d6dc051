use std::fmt::Debug;

/// An entity whose status moves through a fixed transition table.
///
/// `next_status` is the whole table: `None` means the action is not allowed
/// from `from`, and callers must treat that as a no-op.
pub trait Lifecycle: Clone {
    type Id: PartialEq + Clone + Debug;
    type Status: Copy + PartialEq + Debug;
    type Action: Copy + Debug;

    fn id(&self) -> &Self::Id;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    fn next_status(action: Self::Action, from: Self::Status) -> Option<Self::Status>;

    fn allows(&self, action: Self::Action) -> bool {
        Self::next_status(action, self.status()).is_some()
    }
}
