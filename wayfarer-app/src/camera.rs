use std::path::{Path, PathBuf};
use std::sync::mpsc;

use tracing::{debug, info, warn};

use wayfarer_core::{
    AddDestinationForm, CaptureLedger, CaptureOutcome, CaptureResult, Photo, RequestId,
};

use crate::assets::square_thumbnail;

/// Side length of the photo preview shown in the add form.
pub(crate) const PREVIEW_SIDE: u32 = 256;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Work sent from the UI thread to the capture worker.
pub(crate) struct CaptureJob {
    pub(crate) id: RequestId,
    pub(crate) path: PathBuf,
}

/// Stands in for the device camera on desktop.
///
/// The user picks an existing still image; a worker thread decodes it and
/// reports back by request id. Results are polled from the UI loop.
pub(crate) struct CaptureBridge {
    ledger: CaptureLedger,
    tx_job: mpsc::Sender<CaptureJob>,
    tx_result: mpsc::Sender<CaptureResult>,
    rx_result: mpsc::Receiver<CaptureResult>,
}

impl CaptureBridge {
    pub(crate) fn new() -> Self {
        let (tx_result, rx_result) = mpsc::channel();
        let tx_job = spawn_capture_worker(tx_result.clone());
        Self {
            ledger: CaptureLedger::new(),
            tx_job,
            tx_result,
            rx_result,
        }
    }

    /// Ask the host for one still image on behalf of `form`.
    ///
    /// The file dialog blocks the UI thread while open, the way a camera
    /// activity covers the screen.
    pub(crate) fn take_photo(&mut self, form: &mut AddDestinationForm) {
        let request = form.take_photo(&mut self.ledger);
        info!("Capture {} requested", request.id);
        let picked = rfd::FileDialog::new()
            .set_title("Take a photo")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file();
        match picked {
            Some(path) => {
                let job = CaptureJob {
                    id: request.id,
                    path,
                };
                if let Err(e) = self.tx_job.send(job) {
                    warn!("Capture worker unavailable: {e}");
                    self.reply(request.id, CaptureOutcome::Failed("camera unavailable".into()));
                }
            }
            None => self.reply(request.id, CaptureOutcome::Cancelled),
        }
    }

    /// Deliver finished captures to `form`. Returns true if any pending
    /// request was answered; results for unknown ids are dropped.
    pub(crate) fn poll(&mut self, form: &mut AddDestinationForm) -> bool {
        let mut received = false;
        while let Ok(result) = self.rx_result.try_recv() {
            let id = result.id;
            if !self.ledger.is_pending(id) {
                debug!("Dropping result for unknown capture {id}");
                continue;
            }
            received = true;
            match self.ledger.resolve(result) {
                Ok(outcome) => {
                    if let CaptureOutcome::Failed(ref reason) = outcome {
                        warn!("Capture {id} failed: {reason}");
                    }
                    form.receive_capture(id, outcome);
                }
                Err(e) => warn!("{e}"),
            }
        }
        received
    }

    fn reply(&self, id: RequestId, outcome: CaptureOutcome) {
        let _ = self.tx_result.send(CaptureResult { id, outcome });
    }
}

/// Spawn the capture worker. It runs until the job sender is dropped.
fn spawn_capture_worker(tx_result: mpsc::Sender<CaptureResult>) -> mpsc::Sender<CaptureJob> {
    let (tx_job, rx_job) = mpsc::channel::<CaptureJob>();

    let spawned = std::thread::Builder::new()
        .name("capture-worker".into())
        .spawn(move || {
            debug!("Capture worker thread started");
            while let Ok(job) = rx_job.recv() {
                let outcome = develop(&job.path);
                if tx_result.send(CaptureResult { id: job.id, outcome }).is_err() {
                    break;
                }
            }
            debug!("Capture worker thread exiting");
        });
    if let Err(e) = spawned {
        // Jobs sent to a dead worker fail and resolve as `Failed`.
        warn!("Failed to spawn capture worker: {e}");
    }

    tx_job
}

/// Decode the image at `path` into a preview-sized photo.
pub(crate) fn develop(path: &Path) -> CaptureOutcome {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => return CaptureOutcome::Failed(format!("{}: {e}", path.display())),
    };
    let side = PREVIEW_SIDE.min(img.width()).min(img.height()).max(1);
    let preview = square_thumbnail(&img, side);
    let label = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    debug!("Developed {label} into {side}px preview");
    CaptureOutcome::Captured(Photo {
        width: preview.width(),
        height: preview.height(),
        rgba: preview.into_raw(),
        label,
    })
}
