use anyhow::Result;
use clap::Parser;
use navrail_util::UserPreferences;

/// Terminal navigation rail with persisted collapse state.
#[derive(Debug, Parser)]
#[command(name = "navrail", version, about)]
struct Cli {
    /// Initial page path; navigation entries matching it are highlighted.
    #[arg(long, default_value = "/")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let preferences = match UserPreferences::new() {
        Ok(preferences) => preferences,
        Err(error) => {
            tracing::warn!(error = %error, "Preferences unavailable; continuing without persistence");
            UserPreferences::ephemeral()
        }
    };

    navrail_tui::run(preferences, cli.path).await
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_log_filter())
        .try_init();
}

/// Filter directives for the subscriber: `RUST_LOG` when set, `info`
/// otherwise.
fn default_log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
}
