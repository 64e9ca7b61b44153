use std::time::{Duration, Instant};

use anyhow::Context as _;
use rawblit::{PackedColor, PixelFormat, Surface};
use serde_json::json;

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    warmup: u32,
    repeats: u32,
    padded: bool,
    json: bool,
}

#[derive(Clone, Copy, Debug)]
enum Case {
    /// Opaque source, full row copy.
    Copy { row_px: u32 },
    /// Source with alpha, per-pixel blend.
    Blend { row_px: u32 },
}

impl Case {
    fn name(self) -> String {
        match self {
            Case::Copy { row_px } => format!("copy_{}b", row_px * 4),
            Case::Blend { row_px } => format!("blend_{}b", row_px * 4),
        }
    }

    fn row_px(self) -> u32 {
        match self {
            Case::Copy { row_px } | Case::Blend { row_px } => row_px,
        }
    }
}

// Row widths that hit every copy specialization plus an unaligned one.
const ROW_PIXELS: &[u32] = &[1, 2, 4, 8, 16, 32, 37];

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("--width/--height must be > 0");
    }
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }

    let mut cases = Vec::new();
    for &row_px in ROW_PIXELS {
        cases.push(Case::Copy { row_px });
        cases.push(Case::Blend { row_px });
    }

    let mut report = Vec::new();
    for case in cases {
        let runs = run_case(&args, case)?;
        let (p50, p90, p99) = percentiles(&runs);
        eprintln!(
            "  {name:12} p50={p50:>12}  p90={p90:>12}  p99={p99:>12}",
            name = case.name(),
            p50 = fmt_us(p50),
            p90 = fmt_us(p90),
            p99 = fmt_us(p99),
        );
        report.push(json!({
            "case": case.name(),
            "row_bytes": case.row_px() * 4,
            "p50_ns": p50.as_nanos() as u64,
            "p90_ns": p90.as_nanos() as u64,
            "p99_ns": p99.as_nanos() as u64,
        }));
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "width": args.width,
                "height": args.height,
                "padded": args.padded,
                "repeats": args.repeats,
                "cases": report,
            }))?
        );
    }
    Ok(())
}

fn run_case(args: &BenchArgs, case: Case) -> anyhow::Result<Vec<Duration>> {
    let row_px = case.row_px();
    let src_stride = if args.padded {
        row_px as usize * 4 + 16
    } else {
        row_px as usize * 4
    };

    let format = match case {
        Case::Copy { .. } => PixelFormat::Rgb32,
        Case::Blend { .. } => PixelFormat::Argb32,
    };
    let mut src = Surface::with_stride(row_px, args.height, format, src_stride)
        .with_context(|| format!("create source for {}", case.name()))?;
    src.clear(match case {
        Case::Copy { .. } => PackedColor::from_rgb(200, 10, 30),
        Case::Blend { .. } => PackedColor::from_rgba(200, 10, 30, 128),
    })?;

    let mut dst = Surface::new(args.width, args.height, PixelFormat::Argb32)
        .with_context(|| "create destination")?;
    dst.clear(PackedColor::from_rgb(0, 0, 0))?;

    let tiles = (args.width / row_px).max(1) as i32;
    let one_pass = |dst: &mut Surface| -> anyhow::Result<()> {
        for t in 0..tiles {
            dst.blit_surface(&src, t * row_px as i32, 0)?;
        }
        Ok(())
    };

    for _ in 0..args.warmup {
        one_pass(&mut dst)?;
    }
    let mut runs = Vec::with_capacity(args.repeats as usize);
    for _ in 0..args.repeats {
        let t0 = Instant::now();
        one_pass(&mut dst)?;
        runs.push(t0.elapsed());
    }
    Ok(runs)
}

fn percentiles(runs: &[Duration]) -> (Duration, Duration, Duration) {
    fn p(v: &[Duration], p: f64) -> Duration {
        if v.is_empty() {
            return Duration::ZERO;
        }
        let n = v.len();
        let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
        v[rank - 1]
    }

    let mut v = runs.to_vec();
    v.sort_by_key(|d| d.as_nanos());
    (p(&v, 0.50), p(&v, 0.90), p(&v, 0.99))
}

fn fmt_us(d: Duration) -> String {
    format!("{:.2}us", d.as_secs_f64() * 1e6)
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 1024,
        height: 256,
        warmup: 3,
        repeats: 200,
        padded: false,
        json: false,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--padded" => out.padded = true,
            "--json" => out.json = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"rawblit-bench

Tiles a source across the destination for each row-width class and reports p50/p90/p99.

Usage:
  cargo run --release -q
  cargo run --release -q -- --padded --repeats 500
  cargo run --release -q -- --json > bench.json

Args:
  --width N        (default 1024)
  --height N       (default 256)
  --warmup N       (default 3)
  --repeats N      (default 200)
  --padded         (pad source rows so the block-copy fast path is skipped)
  --json           (print a JSON report to stdout)
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}
