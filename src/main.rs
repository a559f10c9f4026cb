mod cli;

use cli::Args;
use hello_files::config::{discover_config, load_config_from_path, ConfigFile};
use hello_files::prelude::*;
use hello_files::shared::error::{DemoError, ExitCode, OPEN_FAILURE_DIAGNOSTIC};
use owo_colors::{OwoColorize, Stream};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        let code = ExitCode::for_error(&e);
        if code == ExitCode::OpenFailed {
            // The fixed diagnostic belongs on stdout; the details go to stderr
            if let Err(present_err) =
                StdoutPresenter::new().present(&format!("{}\n", OPEN_FAILURE_DIAGNOSTIC))
            {
                eprintln!("{}", present_err);
            }
        }

        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |t| t.red())
        );
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(code.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let working_dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_working_dir(&working_dir)?;

    // Explicit --config wins over auto-discovery
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&working_dir)?,
    }
    .unwrap_or_default();

    let request = build_request(&args, &config, working_dir)?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    // Create adapters (Dependency Injection)
    let file_store = FileSystemStore::new();
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    let use_case = RunDemoUseCase::new(file_store, progress_reporter);
    let response = use_case.execute(request)?;

    if args.verbose {
        for path in &response.created_files {
            eprintln!("🆕 Created {}", path.display());
        }
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let formatter = FormatterFactory::create(format);
    let output = formatter.format(&response.report)?;

    StdoutPresenter::new().present(&output)?;

    Ok(())
}

/// Merges CLI flags, config values, and defaults, in that order of precedence
fn build_request(args: &Args, config: &ConfigFile, working_dir: PathBuf) -> Result<DemoRequest> {
    let mut builder = DemoRequest::builder()
        .working_dir(working_dir)
        .truncate(args.truncate || config.truncate.unwrap_or(false));

    if let Some(name) = &config.first_file {
        builder = builder.first_file(name.as_str());
    }
    if let Some(name) = &config.second_file {
        builder = builder.second_file(name.as_str());
    }
    if let Some(text) = &config.first_payload {
        builder = builder.first_payload(text.as_str());
    }
    if let Some(text) = &config.second_payload {
        builder = builder.second_payload(text.as_str());
    }
    if let Some(max_read) = args.max_read.or(config.max_read) {
        builder = builder.max_read(max_read);
    }

    builder.build()
}

fn validate_working_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DemoError::InvalidWorkingDir {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DemoError::InvalidWorkingDir {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
