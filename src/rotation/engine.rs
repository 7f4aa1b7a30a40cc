use log::{debug, error, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::schedule::Rotation;
use super::types::{Frame, RotationTimings};

/// Drives a `Rotation` on a single background task, publishing every frame.
pub struct RotationEngine;

impl RotationEngine {
    pub fn start(timings: RotationTimings) -> RotationHandle {
        let rotation = Rotation::new(timings);
        let (sender, frames) = watch::channel(rotation.frame());

        info!("Starting panel rotation");
        let task = tokio::spawn(run_rotation(rotation, sender));

        RotationHandle { task, frames }
    }
}

// One timer outstanding at a time; the next is only armed after the frame
// for the previous one has been published.
async fn run_rotation(mut rotation: Rotation, sender: watch::Sender<Frame>) {
    loop {
        sleep(rotation.next_delay()).await;
        let frame = rotation.advance();
        debug!(
            "Rotation frame: current={} incoming={}",
            frame.current.as_str(),
            frame.incoming.map_or("-", |v| v.as_str())
        );
        sender.send_replace(frame);
    }
}

/// Cancellation handle for a running rotation.
///
/// Dropping the handle aborts the rotation too; `stop` additionally waits
/// until the task is gone, after which no frame can be published.
pub struct RotationHandle {
    task: JoinHandle<()>,
    frames: watch::Receiver<Frame>,
}

impl RotationHandle {
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    pub fn frame(&self) -> Frame {
        *self.frames.borrow()
    }

    pub async fn stop(mut self) {
        self.task.abort();
        match (&mut self.task).await {
            Err(e) if e.is_panic() => error!("Rotation task panicked: {}", e),
            _ => info!("Panel rotation stopped"),
        }
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
