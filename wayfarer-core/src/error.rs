use thiserror::Error;

use crate::camera::RequestId;
use crate::navigator::{NavAction, Screen};

/// Errors originating from the navigation and form layer.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("cannot {action} while on the {from} screen")]
    InvalidTransition { from: Screen, action: NavAction },

    #[error("no pending capture request with id {0}")]
    UnknownCaptureRequest(RequestId),

    #[error("destination index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
