use super::*;

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
    time::Duration,
};

use tripdeck_core::usecases::AddToTripOutcome;

/// Handle on a pending simulated import.
///
/// The delay is purely cosmetic today, but the task is modeled honestly:
/// it runs on its own thread, holds a cancellation token, and a cancelled
/// task delivers nothing. A future real network call slots in here without
/// changing the contract.
#[derive(Debug)]
pub struct ImportTask {
    cancelled: Arc<AtomicBool>,
    rx: mpsc::Receiver<Vec<PointOfInterest>>,
    handle: thread::JoinHandle<()>,
}

impl ImportTask {
    /// Spawns a timed task that delivers `batch` after `delay`.
    pub fn spawn(batch: Vec<PointOfInterest>, delay: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let token = Arc::clone(&cancelled);
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            // Sleep in short steps so cancellation takes effect promptly.
            let step = Duration::from_millis(10);
            let mut remaining = delay;
            while !remaining.is_zero() {
                if token.load(Ordering::Relaxed) {
                    return;
                }
                let nap = remaining.min(step);
                thread::sleep(nap);
                remaining = remaining.saturating_sub(nap);
            }
            if token.load(Ordering::Relaxed) {
                return;
            }
            // The receiver may already be gone; nothing to deliver then.
            tx.send(batch).ok();
        });
        Self {
            cancelled,
            rx,
            handle,
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Blocks until the task finishes; `None` if it was cancelled.
    pub fn wait(self) -> Option<Vec<PointOfInterest>> {
        let batch = self.rx.recv().ok();
        if self.handle.join().is_err() {
            return None;
        }
        batch
    }
}

/// Runs the simulated import to completion and adds the delivered batch to
/// the trip selection, item by item, through the usual grouping rule.
pub fn run_import<D: TripRepo>(
    db: &D,
    batch: Vec<PointOfInterest>,
    delay: Duration,
) -> Result<Vec<AddToTripOutcome>> {
    info!("Importing {} shared locations", batch.len());
    let task = ImportTask::spawn(batch, delay);
    let batch = match task.wait() {
        Some(batch) => batch,
        None => {
            warn!("Import was cancelled before completion");
            return Ok(vec![]);
        }
    };
    Ok(usecases::add_all_to_trip(db, batch)?)
}
