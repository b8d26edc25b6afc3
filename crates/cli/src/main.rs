mod command;

use crypto_tracker_core::models::settings::Settings;
use crypto_tracker_core::services::chart_service::DEFAULT_CHART_SIZE;
use crypto_tracker_core::CryptoTracker;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Logs go to stderr so the screen on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crypto_tracker=info,crypto_tracker_core=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let settings = Settings::default();
    let tracker = match CryptoTracker::from_settings(&settings) {
        Ok(tracker) => tracker,
        Err(e) => {
            error!("Cannot start tracker: {e}");
            std::process::exit(1);
        }
    };
    info!(backend = %settings.api_base_url, "Crypto Price Tracker ready");

    println!("{HELP}\n");
    print!("{}", tracker.screen());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Query(query) => tracker.set_query(query).await,
            Command::Search => tracker.search().await,
            Command::Select(choice) => match resolve_choice(&tracker, &choice) {
                Some(id) => tracker.select(&id).await,
                None => {
                    println!("No candidate '{choice}'. Use an id or number from the list.");
                    continue;
                }
            },
            Command::Chart(path) => {
                save_chart(&tracker, &path).await;
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("Unknown command: {input} (try :help)");
                continue;
            }
        }
        println!();
        print!("{}", tracker.screen());
    }

    Ok(())
}

/// Map a user choice (candidate id or 1-based number) to a candidate id.
fn resolve_choice(tracker: &CryptoTracker, choice: &str) -> Option<String> {
    let options = tracker.screen().options;
    if let Ok(n) = choice.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
            return Some(option.id.clone());
        }
    }
    options
        .into_iter()
        .find(|o| o.id == choice)
        .map(|o| o.id)
}

async fn save_chart(tracker: &CryptoTracker, path: &str) {
    let svg = match tracker.chart_svg(DEFAULT_CHART_SIZE) {
        Ok(Some(svg)) => svg,
        Ok(None) => {
            println!("Select a cryptocurrency first.");
            return;
        }
        Err(e) => {
            error!("Chart rendering failed: {e}");
            return;
        }
    };
    match tokio::fs::write(path, svg).await {
        Ok(()) => println!("Chart saved to {path}"),
        Err(e) => warn!("Cannot write {path}: {e}"),
    }
}
