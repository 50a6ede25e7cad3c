use handscript::render::Frame;
use handscript::{BuiltinGlyphs, ExpressionNode, Handwriter, HandwriterConfig, HandwriterError};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Handscript(HandwriterError),
    Json(serde_json::Error),
    EmptyInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Handscript(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::EmptyInput => write!(f, "No expression tree in input"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HandwriterError> for CliError {
    fn from(value: HandwriterError) -> Self {
        Self::Handscript(value)
    }
}

impl From<handscript::Error> for CliError {
    fn from(value: handscript::Error) -> Self {
        Self::Handscript(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Command {
    #[default]
    Plan,
    Layout,
    Frames,
    State,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plan" => Ok(Self::Plan),
            "layout" => Ok(Self::Layout),
            "frames" => Ok(Self::Frames),
            "state" => Ok(Self::State),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    glyphs: Option<String>,
    font_size: Option<f64>,
    speed: Option<f64>,
    jitter: Option<f64>,
    seed: Option<u64>,
    fps: f64,
    time: Option<f64>,
}

fn usage() -> &'static str {
    "handscript-cli\n\
\n\
USAGE:\n\
  handscript-cli [plan] [OPTIONS] [<path>|-]\n\
  handscript-cli layout [OPTIONS] [<path>|-]\n\
  handscript-cli frames [--fps <n>] [OPTIONS] [<path>|-]\n\
  handscript-cli state [--time <ms>] [OPTIONS] [<path>|-]\n\
\n\
OPTIONS:\n\
  --pretty                 pretty-print JSON output\n\
  --config <path>          JSON pipeline config (missing fields take defaults)\n\
  --glyphs <path>          JSON array of extra glyph outlines\n\
  --font-size <px>         em size\n\
  --speed <px/s>           pen speed\n\
  --jitter <px>            maximum jitter, 0 for exact outlines\n\
  --seed <n>               jitter seed for reproducible output\n\
\n\
NOTES:\n\
  - Input is an expression tree in JSON. If <path> is omitted or '-', it is read from stdin.\n\
  - frames samples at --fps (default 60) and always ends on the complete drawing.\n\
  - state without --time prints the complete drawing.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_num<T: FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        fps: 60.0,
        ..Default::default()
    };

    let mut saw_command = false;
    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--glyphs" => args.glyphs = Some(next_value(&mut it)?.clone()),
            "--font-size" => args.font_size = Some(parse_num(next_value(&mut it)?)?),
            "--speed" => args.speed = Some(parse_num(next_value(&mut it)?)?),
            "--jitter" => args.jitter = Some(parse_num(next_value(&mut it)?)?),
            "--seed" => args.seed = Some(parse_num(next_value(&mut it)?)?),
            "--fps" => {
                args.fps = parse_num(next_value(&mut it)?)?;
                if !(args.fps.is_finite() && args.fps > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--time" => args.time = Some(parse_num(next_value(&mut it)?)?),
            cmd if !saw_command && args.input.is_none() && cmd.parse::<Command>().is_ok() => {
                saw_command = true;
                args.command = cmd.parse::<Command>().map_err(|_| CliError::Usage(usage()))?;
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn build_handwriter(args: &Args) -> Result<Handwriter, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => HandwriterConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => HandwriterConfig::default(),
    };
    if let Some(font_size) = args.font_size {
        config.font_size = font_size;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(jitter) = args.jitter {
        config.jitter = jitter;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let writer = Handwriter::new(config)?;
    let Some(path) = args.glyphs.as_deref() else {
        return Ok(writer);
    };
    let mut glyphs = BuiltinGlyphs::default();
    let added = glyphs.extend_from_json(&std::fs::read_to_string(path)?)?;
    tracing::info!(added, path, "loaded extra glyphs");
    Ok(writer.with_glyphs(Arc::new(glyphs)))
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    let tree = ExpressionNode::from_json(&text)?;
    let writer = build_handwriter(&args)?;

    match args.command {
        Command::Layout => write_json(&writer.layout(&tree), args.pretty),
        Command::Plan => write_json(&writer.create_drawing_plan(&tree)?, args.pretty),
        Command::Frames => {
            let plan = writer.create_drawing_plan(&tree)?;
            let frames: Vec<Frame> = plan
                .frames(args.fps)
                .map_err(HandwriterError::from)?
                .collect();
            tracing::debug!(frames = frames.len(), fps = args.fps, "sampled frames");
            write_json(&frames, args.pretty)
        }
        Command::State => {
            let plan = writer.create_drawing_plan(&tree)?;
            let time = args.time.unwrap_or(plan.total_duration_ms);
            write_json(&plan.state_at(time), args.pretty)
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging();

    match run(args) {
        Ok(()) => {}
        Err(CliError::EmptyInput) => {
            eprintln!("{}", CliError::EmptyInput);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
