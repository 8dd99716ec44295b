use crate::domain::ports::ServiceSource;
use crate::store::action::{receive, reload};
use crate::store::Store;
use crate::utils::error::{DashboardError, Result};

/// Reload, fetch once, receive.
///
/// On failure nothing else is dispatched: the store stays invalidated
/// until a later fetch succeeds.
pub async fn fetch_services<S>(store: &Store, source: &S) -> Result<usize>
where
    S: ServiceSource + ?Sized,
{
    store
        .dispatch_async(|store| async move {
            store.dispatch(reload());

            let services = source.fetch_services().await?;
            let count = services.len();
            store.dispatch(receive(services));

            tracing::info!("Received {} services", count);
            Ok::<_, DashboardError>(count)
        })
        .await
}
