use clap::Parser;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use django2dart_compiler::{compile_class_to_dart, compile_model, TransformOptions};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod input;

use error::CliError;
use input::{EditorInput, FileInput, InputSource, StdinInput};

#[derive(Parser)]
#[command(name = "django2dart")]
#[command(version, about = "Generate Dart serializer classes from Django model fields", long_about = None)]
struct Cli {
    /// Dart name of your model
    name: String,

    /// Transforms the names to camelCase when snake_case
    #[arg(short, long)]
    camelcase: bool,

    /// Read the field declarations from a file (`-` for stdin) instead of an editor
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Editor used to collect the field declarations
    #[arg(long, env = "EDITOR", default_value = "vim")]
    editor: String,

    /// Also write the output to `<NAME>.dart` (`<NAME>.json` with `--json`)
    #[arg(short, long)]
    write: bool,

    /// Directory used by `--write`
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the parsed fields and diagnostics as JSON instead of Dart
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input_source(&self) -> Box<dyn InputSource> {
        match &self.input {
            Some(path) if path == Path::new("-") => Box::new(StdinInput),
            Some(path) => Box::new(FileInput::new(path.clone())),
            None => Box::new(EditorInput::new(self.editor.clone())),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = cli.input_source().read_input()?;
    let options = TransformOptions::new(cli.name.clone(), cli.camelcase);
    let compilation = compile_model(&text, &options)?;

    let (output, extension) = if cli.json {
        let mut json = serde_json::to_string_pretty(&compilation)?;
        json.push('\n');
        (json, "json")
    } else {
        (compile_class_to_dart(&compilation.class), "dart")
    };

    if cli.write {
        let out_path = cli.out_dir.join(format!("{}.{}", options.class_name, extension));
        fs::write(&out_path, &output)?;
        info!(path = %out_path.display(), "wrote generated output");
        eprintln!("Generated {} written to {}", options.class_name, out_path.display());
    }

    print!("{}", output);
    Ok(())
}
