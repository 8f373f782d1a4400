use tracing::debug;

use crate::camera::{CaptureLedger, CaptureOutcome, CaptureRequest, Photo, RequestId};
use crate::destination::{Destination, ImageAsset};

/// Latitude given to every destination created from the form.
pub const PLACEHOLDER_LATITUDE: f64 = 34.0522;
/// Longitude given to every destination created from the form.
pub const PLACEHOLDER_LONGITUDE: f64 = -118.2437;

/// State of the "add destination" screen.
///
/// Only the name and description come from the user; location and image
/// are fixed placeholders. Fields are not validated, so empty text makes
/// an empty-named destination.
#[derive(Debug, Clone, Default)]
pub struct AddDestinationForm {
    pub name: String,
    pub description: String,
    awaiting_capture: Option<RequestId>,
    last_capture: Option<CaptureOutcome>,
}

impl AddDestinationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the destination described by the form.
    pub fn submit(&self) -> Destination {
        Destination::new(
            self.name.clone(),
            self.description.clone(),
            PLACEHOLDER_LATITUDE,
            PLACEHOLDER_LONGITUDE,
            ImageAsset::PLACEHOLDER,
        )
    }

    /// Start a capture; the result arrives later via [`Self::receive_capture`].
    pub fn take_photo(&mut self, ledger: &mut CaptureLedger) -> CaptureRequest {
        let request = ledger.issue();
        self.awaiting_capture = Some(request.id);
        request
    }

    /// Record the outcome of a capture this form asked for.
    ///
    /// Returns `false` (and ignores the outcome) when `id` is not the
    /// request the form is currently waiting on.
    pub fn receive_capture(&mut self, id: RequestId, outcome: CaptureOutcome) -> bool {
        if self.awaiting_capture != Some(id) {
            debug!("Add form ignoring stale capture {id}");
            return false;
        }
        self.awaiting_capture = None;
        self.last_capture = Some(outcome);
        true
    }

    pub fn is_capturing(&self) -> bool {
        self.awaiting_capture.is_some()
    }

    /// Most recent successfully captured photo, for preview.
    pub fn photo(&self) -> Option<&Photo> {
        match &self.last_capture {
            Some(CaptureOutcome::Captured(photo)) => Some(photo),
            _ => None,
        }
    }

    pub fn capture_failure(&self) -> Option<&str> {
        match &self.last_capture {
            Some(CaptureOutcome::Failed(reason)) => Some(reason),
            _ => None,
        }
    }
}
