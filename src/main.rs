use bookdesk::config::{self, Settings};
use bookdesk::core::db::ConnectionProvider;
use bookdesk::session::Session;
use bookdesk::shell::Shell;
use std::path::Path;
use tracing::info;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting bookdesk...");

    // Parse CLI arguments: an optional database path, or --config <path>
    let args: Vec<String> = std::env::args().collect();
    let mut database_arg: Option<&str> = None;
    let mut config_arg: Option<&Path> = None;
    match args.get(1).map(String::as_str) {
        Some("--config") => config_arg = args.get(2).map(Path::new),
        Some(path) => database_arg = Some(path),
        None => {}
    }

    let mut settings = match config::resolve(config_arg) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            Settings::default()
        }
    };
    if let Some(url) = database_arg {
        settings.url = url.to_string();
    }

    let provider = ConnectionProvider::new(settings.url.clone());
    match provider.check() {
        Ok(()) => println!("Connected to database: {}", provider.url()),
        Err(e) => eprintln!("Failed to connect to database: {e}"),
    }

    let mut shell = Shell::new(provider, Session::new(settings.preview));
    if let Err(e) = shell.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
