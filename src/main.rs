mod assistant;
mod auth;
mod catalog;
mod common;
mod config;
mod market;
mod ui;

use std::sync::Arc;

use assistant::{AssistantWorker, CannedResponder};
use clap::{Parser, Subcommand};
use config::AppConfig;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::KriSahaayApp;

#[derive(Parser)]
#[command(
    name = "kri-sahaay",
    version,
    about = "Kri-Sahaay farming assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Ask the assistant one question and print the answer (no UI)
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Write the effective config (file values over defaults) to the --config path
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    match cli.mode {
        Some(Mode::Ask { question }) => {
            let question = question.join(" ");
            log::debug!("Headless question: {question}");
            println!("{}", assistant::select_response(&question));
            return Ok(());
        }
        Some(Mode::InitConfig) => {
            if let Err(err) = config::save_config(&cli.config, &app_config) {
                log::error!("Failed to write config {}: {err}", cli.config);
            } else {
                log::info!("Wrote config to {}", cli.config);
            }
            return Ok(());
        }
        None => {}
    }

    run_full_client(app_config).await
}

async fn run_full_client(app_config: AppConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Assistant
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Assistant -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy Assistant worker (Chạy ngầm)
    let worker_config = app_config.clone();
    tokio::spawn(async move {
        let worker = AssistantWorker::new(
            event_tx,
            cmd_rx,
            Arc::new(CannedResponder),
            worker_config,
        );
        if let Err(err) = worker.run().await {
            log::error!("Assistant worker terminated: {err}");
        }
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread), khung hình dọc kiểu điện thoại
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kri-Sahaay")
            .with_inner_size([420.0, 820.0]),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Kri-Sahaay",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("KriSahaayApp should only be initialized once");

            log::info!(
                "Client started (reply delay {} ms)",
                app_config.reply_delay_ms
            );

            Ok(Box::new(KriSahaayApp::new(
                cc,
                &app_config,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
