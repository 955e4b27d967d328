// One outstanding timeout together with the callback it will run.
//
// The browser only hands back an integer handle; the callback object has to
// stay alive until the timeout fires or is cleared. Holding both here means a
// replaced timeout releases its callback instead of leaking it.

#[derive(Debug)]
pub struct PendingTimeout<C> {
    slot: Option<(i32, C)>,
}

impl<C> PendingTimeout<C> {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Removes the pending timeout so the caller can clear it before the
    /// callback is dropped.
    pub fn take(&mut self) -> Option<(i32, C)> {
        self.slot.take()
    }

    /// Stores a newly armed timeout, returning any previous one still held.
    pub fn arm(&mut self, handle: i32, callback: C) -> Option<(i32, C)> {
        self.slot.replace((handle, callback))
    }
}
