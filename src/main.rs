use anyhow::Context;
use clap::Parser;
use jacs_dashboard::domain::ports::ConfigProvider;
use jacs_dashboard::utils::{logger, validation::Validate};
use jacs_dashboard::{CliConfig, Dashboard, HttpServiceSource, LocalStorage, OutputFormat};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting jacs-dashboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let source = HttpServiceSource::from_config(&config).context("building HTTP client")?;
    tracing::info!("Services endpoint: {}", source.url());

    let dashboard = Dashboard::new(source);
    let route = config.route();
    let format = config.format();

    if let Some(seconds) = cli.watch_seconds {
        // 每次 dispatch 都重畫整個畫面
        dashboard.render_on_change(route, format, |frame| {
            print!("\x1b[2J\x1b[H{}", frame);
        });

        if let Err(e) = dashboard.run(route, format).await {
            tracing::warn!("Initial fetch failed: {}", e);
        }

        let interval = Duration::from_secs(seconds.max(1));
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
        };

        match config.output_path() {
            Some(path) => {
                let storage = LocalStorage::new(path.to_string());
                if let Err(e) = dashboard.export(&storage, route, format).await {
                    tracing::warn!("Export failed: {}", e);
                }
                dashboard
                    .watch_and_export(&storage, route, format, interval, shutdown)
                    .await;
            }
            None => {
                dashboard.watch(interval, shutdown).await;
            }
        }
        return Ok(());
    }

    match dashboard.run(route, format).await {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }

            if let Some(path) = config.output_path() {
                let storage = LocalStorage::new(path.to_string());
                let filename = dashboard
                    .export(&storage, route, format)
                    .await
                    .with_context(|| format!("exporting to {}", path))?;
                tracing::info!("📁 Output saved to: {}/{}", path, filename);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Fetching services failed: {} (Category: {:?})",
                e,
                e.category()
            );

            // 失敗時畫面停在重新載入狀態
            if format == OutputFormat::Table {
                print!("{}", dashboard.render(route));
            }

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
