//! Pager Task - runs a pager against a live sensor stream
//!
//! One tokio task owns the pager for the whole activation. It waits on
//! three things, in priority order:
//! - the shutdown signal
//! - the cooldown unlock timer, armed only while a cooldown is running
//! - the next sensor reading
//!
//! Shutting down (or dropping the handle) cancels the subscription and any
//! pending unlock before the pager's state is torn down.

use std::future::pending;
use tilt_ports::{Clock, OrientationSource, PagedView, SensorError, SensorReading};
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::{PagerError, Result};
use crate::pager::GestureDrivenPager;

/// Handle to a running pager task
pub struct PagerHandle<V, C> {
    session_id: Uuid,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<GestureDrivenPager<V, C>>,
}

impl<V, C> PagerHandle<V, C> {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// True once the task stopped on its own (sensor stream closed)
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stop the task and take back the deactivated pager
    pub async fn shutdown(mut self) -> Result<GestureDrivenPager<V, C>> {
        if let Some(tx) = self.shutdown_tx.take() {
            // Task may already have exited on a closed stream
            let _ = tx.send(());
        }

        (&mut self.join)
            .await
            .map_err(|e| PagerError::TaskFailed(e.to_string()))
    }
}

/// Spawns pagers onto the tokio runtime
pub struct PagerTask;

impl PagerTask {
    /// Subscribe to `source` and drive `pager` from it on a new task
    ///
    /// An unavailable sensor is not an error: it is logged, the task idles
    /// until shutdown, and the view is never moved.
    pub fn spawn<V, C>(
        pager: GestureDrivenPager<V, C>,
        source: &dyn OrientationSource,
    ) -> PagerHandle<V, C>
    where
        V: PagedView + 'static,
        C: Clock + 'static,
    {
        let session_id = pager.session_id();

        let readings = match source.subscribe() {
            Ok(rx) => {
                log::info!(
                    "[{}] Subscribed to {} ({}ms interval)",
                    session_id,
                    source.name(),
                    source.update_interval().as_millis()
                );
                Some(rx)
            }
            Err(SensorError::Unavailable(_)) => {
                log::warn!(
                    "[{}] {} is unavailable; gestures disabled",
                    session_id,
                    source.name()
                );
                None
            }
            Err(e) => {
                log::warn!("[{}] {}: {}; gestures disabled", session_id, source.name(), e);
                None
            }
        };

        Self::spawn_with_receiver(pager, readings)
    }

    /// Drive `pager` from an existing receiver (`None` = no sensor)
    pub fn spawn_with_receiver<V, C>(
        pager: GestureDrivenPager<V, C>,
        readings: Option<broadcast::Receiver<SensorReading>>,
    ) -> PagerHandle<V, C>
    where
        V: PagedView + 'static,
        C: Clock + 'static,
    {
        let session_id = pager.session_id();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let join = tokio::spawn(run(pager, readings, shutdown_rx));

        PagerHandle {
            session_id,
            shutdown_tx: Some(shutdown_tx),
            join,
        }
    }
}

async fn run<V, C>(
    mut pager: GestureDrivenPager<V, C>,
    readings: Option<broadcast::Receiver<SensorReading>>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> GestureDrivenPager<V, C>
where
    V: PagedView,
    C: Clock,
{
    let session_id = pager.session_id();

    let Some(mut rx) = readings else {
        // A dropped sender resolves the receiver too
        let _ = shutdown_rx.await;
        pager.deactivate();
        return pager;
    };

    loop {
        let unlock_in = pager
            .unlock_in()
            .map(|d| d.to_std().unwrap_or_default());
        let unlock_timer = async move {
            match unlock_in {
                Some(delay) => tokio::time::sleep(delay).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;

            _ = &mut shutdown_rx => {
                log::debug!("[{}] Shutdown requested", session_id);
                break;
            }

            _ = unlock_timer => {
                pager.release_expired();
            }

            reading = rx.recv() => match reading {
                Ok(reading) => {
                    pager.handle_reading(reading);
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    log::warn!("[{}] Lagging sensor stream, {} readings dropped", session_id, missed);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    log::info!("[{}] Sensor stream closed", session_id);
                    break;
                }
            },
        }
    }

    // Dropping the receiver ends the subscription; the unlock timer died with
    // the last loop iteration.
    drop(rx);
    pager.deactivate();
    pager
}
