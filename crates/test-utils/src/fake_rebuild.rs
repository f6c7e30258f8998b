use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use guidedev::engine::{RebuildOutcome, RuntimeEvent};
use guidedev::errors::Result;
use guidedev::exec::RebuildBackend;
use tokio::sync::mpsc;

/// A fake rebuild backend that:
/// - counts how many rebuilds were requested
/// - optionally reports RebuildCompleted(Success) immediately.
///
/// With `auto_complete` off, the test drives completion itself by sending
/// `RebuildCompleted` on the runtime channel, which is how in-flight
/// behaviour (burst coalescing, failure handling) is exercised.
pub struct FakeRebuilder {
    runtime_tx: mpsc::Sender<RuntimeEvent>,
    rebuilds: Arc<Mutex<u32>>,
    auto_complete: bool,
}

impl FakeRebuilder {
    pub fn new(
        runtime_tx: mpsc::Sender<RuntimeEvent>,
        rebuilds: Arc<Mutex<u32>>,
        auto_complete: bool,
    ) -> Self {
        Self {
            runtime_tx,
            rebuilds,
            auto_complete,
        }
    }
}

impl RebuildBackend for FakeRebuilder {
    fn start_rebuild(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let tx = self.runtime_tx.clone();
        let rebuilds = Arc::clone(&self.rebuilds);
        let auto_complete = self.auto_complete;

        Box::pin(async move {
            {
                let mut guard = rebuilds.lock().unwrap();
                *guard += 1;
            }

            if auto_complete {
                tx.send(RuntimeEvent::RebuildCompleted {
                    outcome: RebuildOutcome::Success,
                })
                .await
                .map_err(anyhow::Error::from)?;
            }
            Ok(())
        })
    }
}
