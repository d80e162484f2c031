use crate::controllers::export::export_job::ExportRequest;
use crate::controllers::export::tiled_exporter::{ExportError, ExportOutcome, ExportProgress, export_image};
use crate::controllers::renderer::fractal_renderer::FractalRenderer;
use crate::core::actions::cancellation::CancelFlag;
use crate::core::data::frame_snapshot::FrameSnapshot;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// An export running on a background thread.
///
/// The renderer moves into the thread for the duration of the export and is
/// handed back by [`ExportHandle::join`].
pub struct ExportHandle {
    cancel: CancelFlag,
    progress: Receiver<ExportProgress>,
    worker: JoinHandle<(FractalRenderer, ExportOutcome)>,
}

impl ExportHandle {
    #[must_use]
    pub fn spawn(mut renderer: FractalRenderer, snapshot: FrameSnapshot, request: ExportRequest) -> Self {
        let cancel = CancelFlag::new();
        let (sender, progress) = mpsc::channel();
        let token = cancel.clone();

        let worker = thread::spawn(move || {
            let outcome = export_image(
                &mut renderer,
                &snapshot,
                request,
                |update| {
                    // The receiver may already be gone; the export carries on.
                    let _ = sender.send(update);
                },
                &token,
            );

            (renderer, outcome)
        });

        Self {
            cancel,
            progress,
            worker,
        }
    }

    /// Requests cancellation. Takes effect before the next tile starts.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn progress(&self) -> &Receiver<ExportProgress> {
        &self.progress
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the export and returns the renderer with the outcome.
    pub fn join(self) -> Result<(FractalRenderer, ExportOutcome), ExportError> {
        self.worker.join().map_err(|_| ExportError::WorkerPanicked)
    }
}
