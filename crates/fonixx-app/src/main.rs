mod app_state;
mod cli;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use fonixx_config::schema::LogLevel;
use fonixx_config::FonixxConfig;

/// `RUST_LOG` plus one extra directive; an unparsable directive falls
/// back to `info`.
fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("fonixx: ignoring log directive {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

fn main() {
    let args = cli::parse();

    // Logging is configured from the config file, so load it first and
    // report the outcome once the subscriber is up.
    let loaded = fonixx_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => LogLevel::default().directive().to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("Fonixx v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FonixxConfig::default()
        }
    };
    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }

    let site_dir = app_state::resolve_site_dir(args.site.as_deref(), &config);
    let start_page = args
        .page
        .clone()
        .unwrap_or_else(|| config.site.start_page.clone());
    tracing::info!(site = %site_dir.display(), page = %start_page, "site resolved");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::FonixxApp::new(config, site_dir, start_page);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
