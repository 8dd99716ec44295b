use crate::app::actions::fetch_services;
use crate::domain::model::AppState;
use crate::domain::ports::{ServiceSource, Storage};
use crate::store::Store;
use crate::utils::error::Result;
use crate::view::{OutputFormat, Route, ServiceTable, Shell};
use std::future::Future;
use std::time::Duration;

pub struct Dashboard<S: ServiceSource> {
    store: Store,
    source: S,
    shell: Shell,
}

impl<S: ServiceSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, Store::new())
    }

    pub fn with_store(source: S, store: Store) -> Self {
        Self {
            store,
            source,
            shell: Shell::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    /// 應用程式啟動時抓取一次
    pub async fn bootstrap(&self) -> Result<usize> {
        tracing::info!("Bootstrapping dashboard");
        fetch_services(&self.store, &self.source).await
    }

    /// Mounting the services view fetches again; other views fetch nothing.
    pub async fn mount(&self, route: Route) -> Result<Option<usize>> {
        tracing::debug!("Mounting {}", route);
        if !route.fetches_on_mount() {
            return Ok(None);
        }
        fetch_services(&self.store, &self.source).await.map(Some)
    }

    pub fn render(&self, route: Route) -> String {
        self.shell.render(&self.store.state(), route)
    }

    pub fn output(&self, route: Route, format: OutputFormat) -> Result<String> {
        render_output(&self.shell, &self.store.state(), route, format)
    }

    /// Bootstrap, mount `route`, and render it in `format`.
    pub async fn run(&self, route: Route, format: OutputFormat) -> Result<String> {
        self.bootstrap().await?;
        self.mount(route).await?;
        self.output(route, format)
    }

    /// Writes the current output to `services.<ext>` and returns the file name.
    pub async fn export<T: Storage>(
        &self,
        storage: &T,
        route: Route,
        format: OutputFormat,
    ) -> Result<String> {
        let filename = format!("services.{}", format.extension());
        let data = self.output(route, format)?;

        tracing::debug!("Writing {} ({} bytes)", filename, data.len());
        storage.write_file(&filename, data.as_bytes()).await?;
        Ok(filename)
    }

    /// Calls `sink` with the output in `format` after every dispatch.
    pub fn render_on_change<F>(&self, route: Route, format: OutputFormat, sink: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let shell = self.shell.clone();
        self.store
            .subscribe(move |state| match render_output(&shell, state, route, format) {
                Ok(frame) => sink(frame),
                Err(e) => tracing::warn!("Render failed: {}", e),
            });
    }

    /// Re-fetches every `interval` until `shutdown` resolves.
    ///
    /// Failures are logged and the loop keeps going; the view shows the
    /// reloading state until the next successful fetch. Returns the number
    /// of fetches attempted.
    pub async fn watch<F>(&self, interval: Duration, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        self.watch_loop(interval, shutdown, || async {}).await
    }

    /// Like [`Dashboard::watch`], rewriting the export after every refresh.
    pub async fn watch_and_export<F, T>(
        &self,
        storage: &T,
        route: Route,
        format: OutputFormat,
        interval: Duration,
        shutdown: F,
    ) -> usize
    where
        F: Future<Output = ()>,
        T: Storage,
    {
        self.watch_loop(interval, shutdown, || async move {
            if let Err(e) = self.export(storage, route, format).await {
                tracing::warn!("Export failed: {}", e);
            }
        })
        .await
    }

    async fn watch_loop<F, H, HF>(
        &self,
        interval: Duration,
        shutdown: F,
        mut after_fetch: H,
    ) -> usize
    where
        F: Future<Output = ()>,
        H: FnMut() -> HF,
        HF: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut attempts = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Stopping watch after {} refreshes", attempts);
                    return attempts;
                }
                _ = ticker.tick() => {
                    attempts += 1;
                    if let Err(e) = fetch_services(&self.store, &self.source).await {
                        tracing::warn!("Refresh failed: {}", e);
                    }
                    after_fetch().await;
                }
            }
        }
    }
}

fn render_output(
    shell: &Shell,
    state: &AppState,
    route: Route,
    format: OutputFormat,
) -> Result<String> {
    let table = || ServiceTable::from_services(&state.services.services);
    match format {
        OutputFormat::Table => Ok(shell.render(state, route)),
        OutputFormat::Csv => table().to_csv(),
        OutputFormat::Json => table().to_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceRecord;
    use crate::utils::error::DashboardError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: calls.clone(),
                    fail,
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl ServiceSource for CountingSource {
        async fn fetch_services(&self) -> Result<Vec<ServiceRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DashboardError::payload("unreachable"));
            }
            Ok(serde_json::from_value(json!([
                {"serviceName": "A", "usage": 1},
                {"serviceName": "B", "usage": 2}
            ]))
            .unwrap())
        }
    }

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                DashboardError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_services_fetches_twice() {
        let (source, calls) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);

        let out = dashboard
            .run(Route::Services, OutputFormat::Table)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(out.contains("A            | 1"));
        assert!(out.contains("B            | 2"));
        assert!(!out.contains("Reloading"));
    }

    #[tokio::test]
    async fn test_run_home_fetches_once() {
        let (source, calls) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);

        let out = dashboard.run(Route::Home, OutputFormat::Table).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(out.contains("Services: 2"));
    }

    #[tokio::test]
    async fn test_failed_bootstrap_renders_reloading() {
        let (source, calls) = CountingSource::new(true);
        let dashboard = Dashboard::new(source);

        assert!(dashboard.run(Route::Services, OutputFormat::Table).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(dashboard.state().services.did_invalidate);
        assert!(dashboard.render(Route::Services).contains("Reloading services..."));
    }

    #[tokio::test]
    async fn test_export_csv() {
        let (source, _) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);
        dashboard.bootstrap().await.unwrap();

        let storage = MockStorage::default();
        let name = dashboard
            .export(&storage, Route::Services, OutputFormat::Csv)
            .await
            .unwrap();

        assert_eq!(name, "services.csv");
        let data = storage.read_file("services.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "Service Name,Usage\nA,1\nB,2\n"
        );
    }

    #[tokio::test]
    async fn test_render_on_change_emits_frames() {
        let (source, _) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        dashboard.render_on_change(Route::Services, OutputFormat::Table, move |frame| {
            sink.lock().unwrap().push(frame);
        });

        dashboard.bootstrap().await.unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains("Reloading services..."));
        assert!(frames[1].contains("A            | 1"));
    }

    #[tokio::test]
    async fn test_render_on_change_uses_format() {
        let (source, _) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        dashboard.render_on_change(Route::Services, OutputFormat::Csv, move |frame| {
            sink.lock().unwrap().push(frame);
        });

        dashboard.bootstrap().await.unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], "Service Name,Usage\n");
        assert_eq!(frames[1], "Service Name,Usage\nA,1\nB,2\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_and_export_rewrites_file() {
        let (source, calls) = CountingSource::new(false);
        let dashboard = Dashboard::new(source);
        let storage = MockStorage::default();

        let attempts = dashboard
            .watch_and_export(
                &storage,
                Route::Services,
                OutputFormat::Json,
                Duration::from_secs(10),
                tokio::time::sleep(Duration::from_secs(25)),
            )
            .await;

        assert_eq!(attempts, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let data = storage.read_file("services.json").await.unwrap();
        let exported: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(exported[1]["serviceName"], "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_refreshes_until_shutdown() {
        let (source, calls) = CountingSource::new(true);
        let dashboard = Dashboard::new(source);

        let attempts = dashboard
            .watch(
                Duration::from_secs(10),
                tokio::time::sleep(Duration::from_secs(35)),
            )
            .await;

        assert_eq!(attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(dashboard.state().services.did_invalidate);
    }
}
