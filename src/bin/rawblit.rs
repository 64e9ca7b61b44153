use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rawblit", version)]
struct Cli {
    /// Log blit decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw every layer of a plan onto a fresh canvas and save it.
    Compose(ComposeArgs),
    /// Draw one image onto another and save the result.
    Blit(BlitArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input plan JSON. Layer sources resolve relative to its directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BlitArgs {
    /// Destination image.
    #[arg(long)]
    dst: PathBuf,

    /// Source image.
    #[arg(long)]
    src: PathBuf,

    /// Destination x of the source rectangle.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Destination y of the source rectangle.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y: i32,

    /// Source rectangle as `x,y,w,h`; the whole source when omitted.
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    src_rect: Option<rawblit::Rect>,

    /// Color key as `RRGGBB`; matching source pixels become transparent.
    #[arg(long, value_parser = parse_rgb)]
    transparent: Option<rawblit::PackedColor>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Blit(args) => cmd_blit(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_plan_json(path: &Path) -> anyhow::Result<rawblit::BlitPlan> {
    let f = File::open(path).with_context(|| format!("open plan '{}'", path.display()))?;
    let r = BufReader::new(f);
    let plan: rawblit::BlitPlan =
        serde_json::from_reader(r).with_context(|| "parse plan JSON")?;
    Ok(plan)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let plan = read_plan_json(&args.in_path)?;
    let root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let out = rawblit::execute_plan(&plan, root)?;

    write_output(&out, &args.out)
}

fn cmd_blit(args: BlitArgs) -> anyhow::Result<()> {
    let mut dst = open_surface(&args.dst)?;
    let mut src = open_surface(&args.src)?;
    if let Some(key) = args.transparent {
        src.make_transparent(key)?;
    }

    let rect = args.src_rect.unwrap_or_else(|| src.size().to_rect());
    dst.blit(&src, args.x, args.y, rect.x, rect.y, rect.width, rect.height)?;

    write_output(&dst, &args.out)
}

fn open_surface(path: &Path) -> anyhow::Result<rawblit::Surface> {
    let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(rawblit::Surface::from_image(&img)?)
}

fn write_output(surface: &rawblit::Surface, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface.save(path)?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn parse_rect(s: &str) -> Result<rawblit::Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid rect '{s}': {e}"))?;
    match parts.as_slice() {
        &[x, y, w, h] => Ok(rawblit::Rect::new(x, y, w, h)),
        _ => Err(format!("expected x,y,w,h, got '{s}'")),
    }
}

fn parse_rgb(s: &str) -> Result<rawblit::PackedColor, String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got '{s}'"));
    }
    let v = u32::from_str_radix(hex, 16).map_err(|e| format!("invalid color '{s}': {e}"))?;
    Ok(rawblit::PackedColor::from_rgb(
        (v >> 16) as u8,
        (v >> 8) as u8,
        v as u8,
    ))
}
