use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::Result;
use clap::{ArgAction, Parser as ClapParser};
use defc::{
    compiler::{
        compiler::{read_and_compile, write_output},
        options::CompilerOptions,
    },
    display_error,
    parser::parser::{ParseOptions, DEFAULT_MAX_DEPTH},
};
use log::{error, info};

#[derive(ClapParser)]
#[command(name = "defc")]
#[command(about = "Compiles `def name(args) ... end` definitions to Python", long_about = None)]
struct Cli {
    /// Input files, each compiled on its own
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Directory the generated files are written to
    #[arg(short, long, value_name = "DIR", default_value = "outputs")]
    output_dir: PathBuf,

    /// Reject tokens after the closing `end`
    #[arg(long)]
    strict: bool,

    /// How deeply calls may nest inside each other
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token sequence of each file
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree of each file
    #[arg(long)]
    ast: bool,

    /// Print the generated code without writing it
    #[arg(long)]
    no_write: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = CompilerOptions {
        output_dir: cli.output_dir.clone(),
        parse: ParseOptions {
            strict: cli.strict,
            max_depth: cli.max_depth,
        },
        ..CompilerOptions::default()
    };

    let start = Instant::now();
    let mut failed = 0;

    for file in &cli.files {
        match run_file(&cli, file, &options) {
            Ok(true) => {}
            Ok(false) => failed += 1,
            Err(err) => {
                error!("{:#}", err);
                failed += 1;
            }
        }
    }

    info!(
        "compiled {} of {} file(s) in {:?}",
        cli.files.len() - failed,
        cli.files.len(),
        start.elapsed()
    );

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Compiles one file. `Ok(false)` means the source itself was rejected and
/// the diagnostic has already been shown.
fn run_file(cli: &Cli, file: &Path, options: &CompilerOptions) -> Result<bool> {
    let (source, compilation) = read_and_compile(file, options)?;

    let compilation = match compilation {
        Ok(compilation) => compilation,
        Err(err) => {
            display_error(&err, &source, file);
            return Ok(false);
        }
    };

    if cli.tokens {
        println!("===============");
        for token in &compilation.tokens {
            println!("{}", token);
        }
    }

    if cli.ast {
        println!("{:#?}", compilation.ast);
    }

    println!("++++++++++++");
    println!("{}", compilation.code);

    if !cli.no_write {
        let path = write_output(&compilation.code, file, options)?;
        println!("-> {}", path.display());
    }

    Ok(true)
}
