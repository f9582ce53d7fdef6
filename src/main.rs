use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use filterbooth::api;
use filterbooth::assets::{AssetCategory, AssetLoader};
use filterbooth::server;
use filterbooth::services::{FilterRequest, FilterService};
use tone_filters::{Adjustments, Filter, InputMode};

#[derive(Parser)]
#[command(name = "filterbooth")]
#[command(about = "Filterbooth - apply tone filters to photos and download them as PNG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply a filter to an image file and write a PNG
    Apply {
        /// Input JPEG or PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Filter: Grayscale, Paris, London, Tokyo or Oslo
        #[arg(short, long, default_value = "Grayscale")]
        filter: String,

        /// Brightness factor (0.5 to 2.0)
        #[arg(short, long, default_value_t = 1.0)]
        brightness: f32,

        /// Scale factor (0.5 to 1.5)
        #[arg(short, long, default_value_t = 1.0)]
        scale: f32,

        /// Output PNG path (default: <filter>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available filters
    Filters,
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract page files (index.html, app.js, app.css)
        #[arg(long)]
        web: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filterbooth API",
        description = "Apply tone filters to photos and download them as PNG",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_filters,
        api::handle_process,
        api::handle_download,
    ),
    components(schemas(
        api::FilterForm,
        api::FiltersResponse,
        api::SliderInfo,
        api::ProcessResponse,
        api::ImagePayload,
        api::ErrorResponse,
    )),
    tags(
        (name = "Filters", description = "Filter listing and image processing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Apply {
            input,
            filter,
            brightness,
            scale,
            output,
        }) => run_apply_command(&input, &filter, brightness, scale, output),
        Some(Commands::Filters) => {
            run_filters_command();
            Ok(())
        }
        Some(Commands::Init {
            web,
            config,
            all,
            force,
            list,
        }) => run_init_command(web, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Apply a filter to a file (no server needed)
fn run_apply_command(
    input: &Path,
    filter: &str,
    brightness: f32,
    scale: f32,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filterbooth=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let filter: Filter = filter.parse()?;
    let adjustments = Adjustments::new(brightness, scale)?;
    let image = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;

    let request = FilterRequest {
        mode: InputMode::Upload,
        image,
        filter,
        adjustments,
    };
    let rendered = FilterService::new().render_blocking(&request)?;

    let output = output.unwrap_or_else(|| PathBuf::from(rendered.file_name()));
    std::fs::write(&output, &rendered.png)?;
    println!(
        "Wrote {} ({}x{}, {} bytes)",
        output.display(),
        rendered.processed.width(),
        rendered.processed.height(),
        rendered.png.len()
    );

    Ok(())
}

/// Print the filter table
fn run_filters_command() {
    println!("Filters:");
    for filter in Filter::ALL {
        println!("  {:<10} {}", filter.name(), filter.recipe());
    }
}

/// Extract embedded assets to filesystem
fn run_init_command(
    web: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Web:");
        for f in AssetLoader::list_embedded(AssetCategory::Web) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || web {
        categories.push(AssetCategory::Web);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --web, or --config");
        eprintln!("\nRun 'filterbooth init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let web_dir = std::env::var("WEB_DIR").ok();

    println!("Filterbooth v{VERSION}");
    println!("Photo filters in the browser\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  WEB_DIR     = {}",
        web_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:  {config_source}");

    let embedded_count = AssetLoader::list_embedded(AssetCategory::Web).len();
    match web_dir {
        Some(ref path) if Path::new(path).exists() => {
            let loader = AssetLoader::new(Some(PathBuf::from(path)), None);
            println!(
                "  Web:     {path} ({} files, {embedded_count} embedded)",
                loader.list_web().len()
            );
        }
        _ => println!("  Web:     embedded ({embedded_count} files)"),
    }

    println!("\nCommands:");
    println!("  filterbooth serve     Start the HTTP server");
    println!("  filterbooth apply     Apply a filter to an image file");
    println!("  filterbooth filters   List available filters");
    println!("  filterbooth init      Extract embedded assets");
    println!("\nRun 'filterbooth --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "filterbooth=debug,tone_filters=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        web = ?asset_loader.web_dir().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?asset_loader.config_file().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    // Seed if configured paths are empty
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                web = report.web_seeded.len(),
                config = report.config_seeded,
                "Seeded empty paths with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Filterbooth server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
