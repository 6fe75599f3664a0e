use log::{debug, info, warn};
use rand::RngCore;
use regression::ModelParameters;
use tokio::{sync::mpsc, task, time};
use tokio_util::sync::CancellationToken;

use crate::{
    controller::{Tick, TrainingController},
    event::TrainingEvent,
};

/// How a driven run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveOutcome {
    /// The budget was exhausted, carrying the final parameters.
    Finished(ModelParameters),
    /// The run was cancelled after `epoch` steps, its parameters were not delivered.
    Cancelled { epoch: usize },
}

/// Drives a run of the controller to its end, one tick at a time.
///
/// Control goes back to the runtime between ticks, either by yielding or by sleeping
/// the configured tick interval. Cancellation is only observed between ticks, a
/// cancelled run keeps its partial parameters and stays `Running` until the owner
/// resets or drives it again.
///
/// # Arguments
/// * `controller` - The controller to drive, started if it isn't running yet.
/// * `cancel` - Interrupts the run at the next tick boundary.
/// * `events` - Where to publish every sample and the final outcome. A closed
///   channel does not stop the run.
///
/// # Returns
/// Whether the run finished or was cancelled.
pub async fn drive<R: RngCore>(
    controller: &mut TrainingController<R>,
    cancel: &CancellationToken,
    events: &mpsc::Sender<TrainingEvent>,
) -> DriveOutcome {
    controller.start();
    let interval = controller.config().tick_interval();

    loop {
        if cancel.is_cancelled() {
            let epoch = controller.epoch();
            info!(epoch = epoch; "training cancelled");

            publish(events, TrainingEvent::Cancelled { epoch }).await;
            return DriveOutcome::Cancelled { epoch };
        }

        match controller.tick() {
            Tick::Progress(sample) => publish(events, TrainingEvent::Sample(sample)).await,
            Tick::Finished { sample, params } => {
                publish(events, TrainingEvent::Sample(sample)).await;
                publish(events, TrainingEvent::Finished(params)).await;
                return DriveOutcome::Finished(params);
            }
            Tick::Inactive(state) => {
                warn!(state:? = state; "driven controller is not running");
                return DriveOutcome::Cancelled {
                    epoch: controller.epoch(),
                };
            }
        }

        match interval {
            Some(interval) => {
                tokio::select! {
                    _ = time::sleep(interval) => {}
                    _ = cancel.cancelled() => {}
                }
            }
            None => task::yield_now().await,
        }
    }
}

async fn publish(events: &mpsc::Sender<TrainingEvent>, event: TrainingEvent) {
    if events.send(event).await.is_err() {
        debug!("training event receiver dropped");
    }
}
