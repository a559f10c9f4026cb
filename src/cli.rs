use clap::Parser;
use hello_files::application::dto::OutputFormat;
use hello_files::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Write two files, rewind the first, and read it back into a bounded buffer
#[derive(Parser, Debug)]
#[command(name = "hello-files")]
#[command(version)]
#[command(about = "Write two files, rewind the first, and read it back into a bounded buffer", long_about = None)]
pub struct Args {
    /// Directory in which the files are created (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to a config file (defaults to hello-files.config.yml in --dir, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Truncate existing files when opening them
    #[arg(long)]
    pub truncate: bool,

    /// Maximum number of bytes read back (the buffer keeps one extra byte for the terminator)
    #[arg(long, value_name = "N")]
    pub max_read: Option<usize>,

    /// Report each step on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the command line, exiting with `ExitCode::InvalidArguments`
    /// on a usage error and `ExitCode::Success` after `--help`/`--version`
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => {
                let code = exit_code_for(&err);
                if let Err(print_err) = err.print() {
                    eprintln!("{}", print_err);
                }
                process::exit(code.as_i32());
            }
        }
    }
}

/// Help and version output are not failures; everything else clap rejects is
fn exit_code_for(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
