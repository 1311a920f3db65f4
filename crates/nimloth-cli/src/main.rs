use nimloth::layout::{LayoutConfig, layout_family};
use nimloth::{Person, PersonId, Roster};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Roster(nimloth::Error),
    Config(nimloth::layout::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Roster(err) => write!(f, "{err}"),
            CliError::Config(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<nimloth::Error> for CliError {
    fn from(value: nimloth::Error) -> Self {
        Self::Roster(value)
    }
}

impl From<nimloth::layout::Error> for CliError {
    fn from(value: nimloth::layout::Error) -> Self {
        Self::Config(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Family,
    Generations,
    Positions,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    focal: Option<PersonId>,
    current_user: Option<PersonId>,
    config: Option<String>,
    horizontal_spacing: Option<f64>,
    vertical_spacing: Option<f64>,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    focal: Option<PersonId>,
    elements: nimloth::layout::Elements<'a>,
}

fn usage() -> &'static str {
    "nimloth-cli\n\
\n\
USAGE:\n\
  nimloth-cli [layout] [--focal <id>] [--current-user <id>] [--config <path>] [--horizontal-spacing <n>] [--vertical-spacing <n>] [--pretty] [<path>|-]\n\
  nimloth-cli family [--focal <id>] [--pretty] [<path>|-]\n\
  nimloth-cli generations [--focal <id>] [--pretty] [<path>|-]\n\
  nimloth-cli positions [--focal <id>] [--config <path>] [--horizontal-spacing <n>] [--vertical-spacing <n>] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is the person-listing JSON array; if <path> is omitted or '-', it is read from stdin.\n\
  - --focal defaults to --current-user. Without either, everyone is shown in one row.\n\
  - A focal id that is not in the list falls back to showing everyone.\n\
  - --config reads a JSON object with horizontalSpacing/verticalSpacing; flags override it.\n\
  - Set NIMLOTH_LOG (e.g. NIMLOTH_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_id(value: Option<&String>) -> Result<PersonId, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    value
        .parse::<u64>()
        .map(PersonId)
        .map_err(|_| CliError::Usage(usage()))
}

fn parse_spacing(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    value.parse::<f64>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "family" => args.command = Command::Family,
            "generations" => args.command = Command::Generations,
            "positions" => args.command = Command::Positions,
            "--pretty" => args.pretty = true,
            "--focal" => args.focal = Some(parse_id(it.next())?),
            "--current-user" => args.current_user = Some(parse_id(it.next())?),
            "--horizontal-spacing" => args.horizontal_spacing = Some(parse_spacing(it.next())?),
            "--vertical-spacing" => args.vertical_spacing = Some(parse_spacing(it.next())?),
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
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

fn load_config(args: &Args) -> Result<LayoutConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => LayoutConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if let Some(h) = args.horizontal_spacing {
        config.horizontal_spacing = h;
    }
    if let Some(v) = args.vertical_spacing {
        config.vertical_spacing = v;
    }
    config.validate()?;
    Ok(config)
}

/// Resolves an id against the roster; unknown ids degrade to "no person".
fn lookup<'a>(roster: &'a Roster, id: Option<PersonId>, what: &str) -> Option<&'a Person> {
    let id = id?;
    let person = roster.get(id);
    if person.is_none() {
        tracing::warn!(%id, "{what} not found in the person list; ignoring");
    }
    person
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("NIMLOTH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let text = read_input(args.input.as_deref())?;
    let roster = Roster::from_json(&text)?;

    let current_user = lookup(&roster, args.current_user, "current user");
    let focal = match args.focal {
        Some(_) => lookup(&roster, args.focal, "focal person"),
        None => current_user,
    };

    let layout = layout_family(roster.persons(), focal, current_user, &config);
    tracing::info!(
        persons = roster.len(),
        family = layout.family.len(),
        nodes = layout.graph.nodes.len(),
        edges = layout.graph.edges.len(),
        "laid out family tree"
    );

    match args.command {
        Command::Family => write_json(&layout.family, args.pretty),
        Command::Generations => write_json(&layout.generations, args.pretty),
        Command::Positions => write_json(&layout.positions, args.pretty),
        Command::Layout => write_json(
            &LayoutOut {
                focal: focal.and_then(|p| p.id),
                elements: layout.graph.to_elements(),
            },
            args.pretty,
        ),
    }
}

fn main() {
    init_tracing();

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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
