use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use bookdash_api::{CollectionLoader, DetailLoader};
use bookdash_core::config::ApiConfig;

use crate::event::AppEvent;

/// Fetch the dashboard collection in the background. The result carries the
/// generation it was started with so stale responses can be dropped.
pub fn spawn_collection_fetch(
    tx: UnboundedSender<AppEvent>,
    config: ApiConfig,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let loader = CollectionLoader::new(&config);
        let result = loader.fetch().await.map_err(|e| e.to_string());
        let _ = tx.send(AppEvent::CollectionLoaded { generation, result });
    })
}

/// Fetch one work's detail in the background. The handle is kept by the app
/// so leaving the detail view aborts the fetch.
pub fn spawn_detail_fetch(
    tx: UnboundedSender<AppEvent>,
    config: ApiConfig,
    work_id: String,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let loader = DetailLoader::new(&config);
        let result = match loader.fetch(&work_id).await {
            Ok(detail) => Ok(Box::new(detail)),
            Err(e) if e.is_not_found() => Err("Book not found".to_string()),
            Err(e) => Err(e.to_string()),
        };
        let _ = tx.send(AppEvent::DetailLoaded { generation, result });
    })
}
