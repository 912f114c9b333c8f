/// Handles of pending `setTimeout` callbacks. Closing the set hands back
/// every live handle for clearing and refuses new ones afterwards.
#[derive(Debug, Default)]
pub struct PendingTimers {
    handles: Vec<i32>,
    closed: bool,
}

impl PendingTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `handle`; false once the set is closed.
    pub fn track(&mut self, handle: i32) -> bool {
        if self.closed {
            return false;
        }
        self.handles.push(handle);
        true
    }

    /// Forgets a handle whose callback has run.
    pub fn finish(&mut self, handle: i32) {
        self.handles.retain(|&h| h != handle);
    }

    /// Closes the set and returns the handles still pending.
    pub fn close(&mut self) -> Vec<i32> {
        self.closed = true;
        std::mem::take(&mut self.handles)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
