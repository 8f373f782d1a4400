//! Request/response bookkeeping for still-image capture.
//!
//! Capturing happens outside the UI loop. The UI issues a [`CaptureRequest`]
//! through the [`CaptureLedger`], hands it to the host, and later feeds the
//! host's [`CaptureResult`] back into the ledger, which matches it to the
//! outstanding request by id.

use std::fmt;

use tracing::debug;

use crate::error::CoreError;

/// Identifier pairing a capture request with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u32);

impl RequestId {
    pub const FIRST: RequestId = RequestId(1);
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// "Capture one still image."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub id: RequestId,
}

/// Decoded RGBA still image.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
    /// Human-readable origin (file name) for display.
    pub label: String,
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(Photo),
    /// The user backed out of the capture flow.
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureResult {
    pub id: RequestId,
    pub outcome: CaptureOutcome,
}

/// Issues request ids and tracks which ones are still awaiting a result.
#[derive(Debug)]
pub struct CaptureLedger {
    next_id: u32,
    pending: Vec<RequestId>,
}

impl Default for CaptureLedger {
    fn default() -> Self {
        Self {
            next_id: RequestId::FIRST.0,
            pending: Vec::new(),
        }
    }
}

impl CaptureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> CaptureRequest {
        let id = RequestId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(id);
        debug!("Issued capture request {id}");
        CaptureRequest { id }
    }

    /// Match `result` to its request and hand back the outcome.
    ///
    /// Each id resolves once; a second result for the same id is an error.
    pub fn resolve(&mut self, result: CaptureResult) -> crate::Result<CaptureOutcome> {
        let Some(pos) = self.pending.iter().position(|&id| id == result.id) else {
            return Err(CoreError::UnknownCaptureRequest(result.id));
        };
        self.pending.remove(pos);
        debug!("Resolved capture request {}", result.id);
        Ok(result.outcome)
    }

    /// Whether `id` was issued and has not been resolved yet.
    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains(&id)
    }
}
