use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_tiles::{
    router, AppState, CliRenderController, ColourMapKind, EngineConfig, PngFilePresenter, TileAddress,
    TileController,
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_tiles")]
#[command(about = "Serves Mandelbrot set tiles over HTTP")]
struct Cli {
    /// Log filter, e.g. "info" or "mandelbrot_tiles=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Band workers per render; overrides the environment when set
    #[arg(long, global = true)]
    worker_count: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the tile server (default)
    Serve(ServeArgs),
    /// Render one tile to a PNG file
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Directory served for every non-tile path
    #[arg(long, default_value = "frontend")]
    frontend: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            frontend: PathBuf::from("frontend"),
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    z: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y: i64,

    #[arg(short, long, default_value = "output/tile.png")]
    output: PathBuf,

    #[arg(long)]
    max_iterations: Option<String>,

    #[arg(long)]
    palette: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::from_env().with_worker_count_override(cli.engine.worker_count.as_deref());
    let tiles = TileController::new(config);

    match cli.command {
        Some(Command::Render(args)) => render(tiles, args),
        Some(Command::Serve(args)) => run_server(tiles, args),
        None => run_server(tiles, ServeArgs::default()),
    }
}

fn run_server(tiles: TileController, args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(serve(tiles, args))
}

fn render(tiles: TileController, args: RenderArgs) -> Result<()> {
    let tile = TileAddress::new(args.z, args.x, args.y);
    let max_iterations = tiles.config().resolve_max_iterations(args.max_iterations.as_deref());
    let colour_map: ColourMapKind = tiles.config().resolve_colour_map(args.palette.as_deref());

    let mut controller = CliRenderController::new(PngFilePresenter::new(), tiles);
    controller.generate(tile, max_iterations, colour_map)?;
    controller.write(&args.output)?;

    Ok(())
}

async fn serve(tiles: TileController, args: ServeArgs) -> Result<()> {
    info!(
        tile_size = tiles.config().tile_size,
        max_iterations = tiles.config().max_iterations,
        workers = tiles.config().worker_count,
        frontend = %args.frontend.display(),
        "starting tile server"
    );

    let app = router(AppState::new(tiles), &args.frontend);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!(address = %args.listen, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
