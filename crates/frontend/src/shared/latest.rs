//! Last-request-wins sequencing for a rendering surface.
//!
//! Every user action that ends up repainting a surface takes a ticket first.
//! When its response arrives it is applied only if no newer ticket was issued
//! in the meantime, so a slow stale response cannot overwrite fresher data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct LatestOnly {
    current: Arc<AtomicU64>,
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; all earlier tickets become stale.
    pub fn issue(&self) -> RequestTicket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            current: Arc::clone(&self.current),
        }
    }
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}
