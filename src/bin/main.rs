use std::{io, path::PathBuf, process::exit};

use clap::{error::ErrorKind, CommandFactory, Parser};
use namescan::{
    acquire, parser, prompt, record::MAX_FIELD_LEN, report, NoticeTarget, Options, ScanError,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (tag ",
    env!("GIT_VERSION"),
    ", commit ",
    env!("GIT_COMMIT"),
    ", built ",
    env!("GIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "namescan",
    version,
    long_version = LONG_VERSION,
    about = "Print the first/last name pairs found in a text file"
)]
struct Cli {
    #[arg(help = "Text file with one \"first last\" pair per line; prompts when omitted")]
    path: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = MAX_FIELD_LEN as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Characters kept from each name"
    )]
    max_len: u64,
    #[arg(
        long,
        default_value_t = MAX_FIELD_LEN as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Report column width, at least --max-len"
    )]
    width: u64,
    #[arg(
        long,
        value_enum,
        default_value_t = NoticeTarget::Stdout,
        help = "Where to print malformed-line notices"
    )]
    notices: NoticeTarget,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            max_len: self.max_len as usize,
            width: self.width as usize,
            notices: self.notices,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.width < cli.max_len {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                format!(
                    "--width ({}) must be at least --max-len ({})",
                    cli.width, cli.max_len
                ),
            )
            .exit()
    }

    if let Err(err) = run(&cli) {
        match err.downcast_ref::<ScanError>() {
            Some(scan) => println!("{}", scan),
            None => eprintln!("{:#}", err),
        }
        exit(1)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let opts = cli.options();
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => read_path()?,
    };

    let source = acquire::open(&path)?;
    let lines = parser::Parser::new(source, opts.max_len);

    let mut out = io::stdout().lock();
    let records = match opts.notices {
        NoticeTarget::Stdout => parser::collect(lines, &mut out)?,
        NoticeTarget::Stderr => parser::collect(lines, &mut io::stderr().lock())?,
    };
    log::debug!("{} record(s) parsed from {}", records.len(), path.display());

    report::render(&mut out, &records, opts.width)?;
    Ok(())
}

#[cfg(not(feature = "readline"))]
fn read_path() -> anyhow::Result<PathBuf> {
    Ok(prompt::prompt_path(io::stdin().lock(), io::stdout())?)
}

#[cfg(feature = "readline")]
fn read_path() -> anyhow::Result<PathBuf> {
    use rustyline::{error::ReadlineError, DefaultEditor};

    let mut rl =
        DefaultEditor::new().map_err(|e| anyhow::anyhow!("can not start line editor: {}", e))?;
    loop {
        match rl.readline(prompt::PROMPT) {
            Ok(line) => {
                if let Some(token) = prompt::first_token(&line) {
                    return Ok(PathBuf::from(token));
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                return Err(ScanError::MissingPath.into())
            }
            Err(e) => return Err(anyhow::anyhow!("can not read file name: {}", e)),
        }
    }
}
