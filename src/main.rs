use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::process;

use scss_tree::config::ScssConfig;
use scss_tree::logging;
use scss_tree::scss::constants::CODE_ANOMALOUS_STATEMENT;
use scss_tree::scss::parser::parse_file;
use scss_tree::scss::tree_printer::print_tree_to_stderr;
use scss_tree::scss::variable_usage::check_unused_variables;

struct CliArgs {
    file: PathBuf,
    include_path: Option<PathBuf>,
    config: Option<PathBuf>,
    outline: bool,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <file> [--include-path <dir>] [--config <file>] [--outline]", program);
    eprintln!("  <file>:          SCSS entry file to parse");
    eprintln!("  --include-path:  directory searched first when resolving imports");
    eprintln!("  --config:        JSON configuration file");
    eprintln!("  --outline:       print a readable tree outline to stderr");
    eprintln!("Example: {} styles/main.scss --include-path styles/shared", program);
    process::exit(1);
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut file = None;
    let mut include_path = None;
    let mut config = None;
    let mut outline = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--include-path" => include_path = Some(PathBuf::from(iter.next()?)),
            "--config" => config = Some(PathBuf::from(iter.next()?)),
            "--outline" => outline = true,
            flag if flag.starts_with("--") => return None,
            path if file.is_none() => file = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(CliArgs {
        file: file?,
        include_path,
        config,
        outline,
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("scss_tree");
    let Some(cli) = parse_args(&args) else {
        usage(program);
    };

    let mut config = match &cli.config {
        Some(path) => match ScssConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", e.kind(), e);
                process::exit(e.exit_code());
            }
        },
        None => ScssConfig::default(),
    };
    if cli.include_path.is_some() {
        config.include_path = cli.include_path.clone();
    }

    // Logging is best effort; parsing proceeds without it
    if let Err(e) = logging::init_logger(config.level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    info!("SCSS tree starting for {}", cli.file.display());
    info!("Command line arguments: {:?}", args);

    let outcome = match parse_file(&cli.file, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Parse failed: {}", e);
            eprintln!("{}: {}", e.kind(), e);
            process::exit(e.exit_code());
        }
    };

    if cli.outline {
        print_tree_to_stderr(&outcome.file);
    }

    match serde_json::to_string_pretty(&outcome.file) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize tree: {}", e);
            eprintln!("Failed to serialize tree: {}", e);
            process::exit(1);
        }
    }

    for diagnostic in outcome
        .diagnostics
        .iter()
        .filter(|d| d.is_code(CODE_ANOMALOUS_STATEMENT))
    {
        eprintln!("{}", diagnostic);
    }

    let unused = check_unused_variables(&outcome.file);
    info!("{} unused variable(s)", unused.len());
    for variable in &unused {
        println!("{}", variable);
    }
}
