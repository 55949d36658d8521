//! Host-facing registration task.
//!
//! Receives one [`RegisterConfig`] per host module instance and answers each
//! with an [`ImageListReady`] payload. Requests are served independently;
//! there is no shared registry of configurations.

use anyhow::Result;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::cache::ImageCache;
use crate::discover;
use crate::events::{ImageListReady, RegisterConfig};

pub async fn run(
    mut requests: Receiver<RegisterConfig>,
    to_host: Sender<ImageListReady>,
    cancel: CancellationToken,
) -> Result<()> {
    let cache = ImageCache::system();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting registry task");
                break;
            }

            maybe_req = requests.recv() => match maybe_req {
                Some(RegisterConfig(cfg)) => {
                    let identifier = cfg.identifier.clone();
                    info!(
                        identifier = %identifier,
                        paths = cfg.image_paths.len(),
                        "slideshow registration received"
                    );
                    let cache = cache.clone();
                    let result =
                        task::spawn_blocking(move || discover::discover_with(&cfg, &cache))
                            .await?;
                    match result {
                        Ok(ready) => {
                            info!(
                                identifier = %ready.identifier,
                                count = ready.image_list.len(),
                                "sending image list to host"
                            );
                            let _ = to_host.send(ready).await;
                        }
                        // Fatal for this request only; the host decides
                        // whether to re-issue it.
                        Err(err) => {
                            error!(identifier = %identifier, error = %err, "image discovery failed");
                        }
                    }
                }
                None => break,
            }
        }
    }
    Ok(())
}
