use crate::{EventKind, Host};

/// Holds at most one listener handle and detaches it on `release`.
///
/// Acquiring while a handle is held is a no-op, so a listener can never be attached twice.
#[derive(Debug)]
pub(crate) struct ListenerSlot<L> {
    handle: Option<L>,
}

impl<L> ListenerSlot<L> {
    pub(crate) fn new() -> Self {
        Self { handle: None }
    }

    pub(crate) fn is_held(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns `true` when a new listener was attached.
    pub(crate) fn acquire<H: Host<Listener = L>>(
        &mut self,
        host: &mut H,
        element: &H::Element,
        kind: EventKind,
    ) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(host.listen(element, kind));
        true
    }

    /// Returns `true` when a held listener was detached.
    pub(crate) fn release<H: Host<Listener = L>>(&mut self, host: &mut H) -> bool {
        match self.handle.take() {
            Some(handle) => {
                host.unlisten(handle);
                true
            }
            None => false,
        }
    }
}
