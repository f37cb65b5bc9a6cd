use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use productpage::{
    EngineSettings, PageEvent, ProductConfig, SectionComposer, StaticViewport, derive_navigation,
    write_document,
};

#[derive(Parser, Debug)]
#[command(name = "productpage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a product config into a standalone HTML page.
    Render(RenderArgs),
    /// Check a product config for authoring mistakes.
    Validate(ConfigArgs),
    /// Print the derived navigation as JSON.
    Nav(ConfigArgs),
    /// Print the active section for a uniform, contiguous section layout.
    Spy(SpyArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Input product config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input product config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Engine settings JSON (defaults apply when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SpyArgs {
    /// Input product config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine settings JSON (defaults apply when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rendered header height in px.
    #[arg(long)]
    header: f64,

    /// Window scroll offset in px.
    #[arg(long)]
    scroll_y: f64,

    /// Height of every module section in px.
    #[arg(long)]
    section_height: f64,

    /// Document offset of the first module section in px.
    #[arg(long, default_value_t = 0.0)]
    first_top: f64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Nav(args) => cmd_nav(args),
        Command::Spy(args) => cmd_spy(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("productpage=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<EngineSettings> {
    match path {
        Some(p) => EngineSettings::from_path(p)
            .with_context(|| format!("load settings '{}'", p.display())),
        None => Ok(EngineSettings::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = ProductConfig::from_path(&args.in_path)?;
    let settings = load_settings(args.settings.as_ref())?;
    let page = SectionComposer::new(settings).compose(&cfg);
    write_document(&page, &args.out)?;
    tracing::info!(
        sections = page.sections.len(),
        out = %args.out.display(),
        "rendered page"
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = ProductConfig::from_path(&args.in_path)?;
    cfg.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    println!("ok");
    Ok(())
}

fn cmd_nav(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = ProductConfig::from_path(&args.in_path)?;
    let nav = derive_navigation(&cfg);
    println!(
        "{}",
        serde_json::to_string_pretty(&nav).context("serialize navigation")?
    );
    Ok(())
}

fn cmd_spy(args: SpyArgs) -> anyhow::Result<()> {
    let cfg = ProductConfig::from_path(&args.in_path)?;
    let settings = load_settings(args.settings.as_ref())?;
    let page = SectionComposer::new(settings.clone()).compose(&cfg);

    let layout: Vec<(&str, f64)> = page
        .anchor_ids()
        .map(|id| (id, args.section_height))
        .collect();
    let mut viewport = StaticViewport::stacked(args.first_top, &layout).with_header(args.header);
    let mut session = page.session(&settings);
    session.mount(&viewport);
    viewport.set_scroll_y(args.scroll_y);
    session.handle(PageEvent::Scroll, &viewport);

    println!(
        "{}",
        session.state().active_section_id().unwrap_or("none")
    );
    Ok(())
}
