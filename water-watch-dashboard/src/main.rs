use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use water_watch_client::{user_id_if_present, ClientConfig, WaterWatchApi};
use water_watch_core::view::{DashboardViewState, LoadOutcome};
use water_watch_dashboard::DashboardView;

#[derive(Parser)]
#[command(name = "water-watch-dashboard")]
#[command(about = "Fetch and summarize your Water Watch environments")]
struct Args {
    /// Credential token obtained from login
    #[arg(long, env = "WATER_WATCH_TOKEN")]
    token: Option<String>,

    /// Base URL of the Water Watch API
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit the dashboard view as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let mut config = ClientConfig::new();
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }

    info!("Water Watch dashboard {}", env!("CARGO_PKG_VERSION"));
    info!("API: {}", config.base_url);

    let api = WaterWatchApi::new(config)?;
    let user_id = user_id_if_present(args.token.as_deref());
    if user_id.is_none() {
        warn!("no usable credential token; the dashboard will show the empty state");
    }

    let mut state = DashboardViewState::new();
    match state.load(&api, user_id.as_ref()).await {
        LoadOutcome::Loaded(count) => info!(count, "environments loaded"),
        LoadOutcome::Unauthenticated => info!("skipped fetch: not authenticated"),
        LoadOutcome::Failed => warn!("fetch failed; showing previously loaded data"),
    }

    let view = DashboardView::from_state(&mut state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&view);
    }

    Ok(())
}

fn print_summary(view: &DashboardView) {
    match view {
        DashboardView::Empty => {
            println!("No environments added yet.");
            println!("You haven't added any water environments to monitor. Start by adding one!");
        }
        DashboardView::Charts { cards, tally, .. } => {
            println!("Environment Safety Dashboard");
            println!(
                "  safe: {}  unsafe: {}  unknown: {}  (total {})",
                tally.safe,
                tally.unsafe_count,
                tally.unknown,
                tally.total()
            );
            println!();
            for card in cards {
                let location = if card.location.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", card.location)
                };
                println!("  [{}] {}{}", card.status_label, card.name, location);
                if let Some(recommendation) = &card.latest_recommendation {
                    println!("      latest recommendation: {recommendation}");
                }
                if card.can_view_all {
                    println!("      more recommendations available");
                }
            }
        }
    }
}
