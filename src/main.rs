use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yansi::Paint;

use clusterdeck::api::set_silent;
use clusterdeck::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use clusterdeck::models::AppState;
use clusterdeck::routes::build_router;
use clusterdeck::services::{get_master_versions, load_users_from_file};

#[derive(Parser)]
#[command(name = "clusterdeck", about = "Admin console for the cluster management platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web console
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Print the master-version catalog the wizard would offer
    Versions {
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let current_hostname = process::Command::new("hostname")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    let expose_dev_versions = config::resolve_expose_dev_versions(&current_hostname);

    let users = load_users_from_file(&PathBuf::from("users.json"));

    let client = reqwest::Client::builder()
        .user_agent(format!("Clusterdeck/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        users,
        sessions: Arc::new(Mutex::new(HashMap::new())),
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        wizards: Arc::new(Mutex::new(HashMap::new())),
        api_base_url: config::get_api_base_url(),
        api_token: config::get_api_token(),
        public_base_url: config::get_public_base_url(),
        client,
        expose_dev_versions,
    }
}

async fn serve(host: String, port: u16, env_file: Option<String>) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clusterdeck=info")))
        .with(fmt::layer())
        .init();

    let state = build_state_from_env(env_file.as_deref());
    tracing::info!(
        expose_dev_versions = state.expose_dev_versions,
        "console starting"
    );

    // Drain debounced wizard edits into their sessions.
    let wizards = state.wizards.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(250));
        loop {
            ticker.tick().await;
            let now = Instant::now();
            let mut flows = wizards.lock().unwrap();
            for flow in flows.values_mut() {
                flow.pump(now);
            }
        }
    });

    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid host/port");
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}

async fn print_versions(env_file: Option<String>) {
    set_silent(true);
    config::load_env_file(env_file.as_deref());
    let client = reqwest::Client::builder()
        .user_agent(format!("Clusterdeck/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    let versions = match get_master_versions(
        &client,
        &config::get_api_base_url(),
        &config::get_api_token(),
    )
    .await
    {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} {}", Paint::red("error:").bold(), e);
            process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w);
    }
    table.set_header(vec!["Version", "Default", "Allowed node versions"]);
    for v in &versions {
        table.add_row(vec![
            v.version.clone(),
            if v.default { "yes".into() } else { String::new() },
            v.allowed_node_versions.join(", "),
        ]);
    }
    println!("{table}");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Versions { env_file }) => print_versions(env_file).await,
        Some(Commands::Serve {
            host,
            port,
            env_file,
        }) => serve(host, port, env_file).await,
        None => serve(DEFAULT_HOST.into(), DEFAULT_PORT, None).await,
    }
}
