use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use ecgen::options::{
    DEFAULT_CHARSET, DEFAULT_END_OF_LINE, DEFAULT_INDENT_SIZE, DEFAULT_INDENT_STYLE,
};
use ecgen::{
    run, should_use_colors, Config, Destination, OptionSet, OutputContext, OutputMode, Tone,
};

#[derive(Parser)]
#[command(name = "ecgen")]
#[command(version, about = "Generate an .editorconfig from command-line defaults")]
struct Cli {
    /// `root`: emit `root = true` so editors stop searching for .editorconfig files here
    #[arg(
        short = 'r',
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    root: bool,

    /// `charset`: latin1, utf-8, utf-8-bom, utf-16be or utf-16le (utf-8-bom is discouraged)
    #[arg(short = 'c', value_name = "CHARSET", default_value = DEFAULT_CHARSET)]
    charset: String,

    /// `indent_size`: number of columns per indentation level and width of soft tabs
    #[arg(
        short = 'i',
        value_name = "N",
        default_value_t = DEFAULT_INDENT_SIZE,
        allow_negative_numbers = true
    )]
    indent_size: i64,

    /// `end_of_line`: lf, cr or crlf
    #[arg(short = 'e', value_name = "EOL", default_value = DEFAULT_END_OF_LINE)]
    end_of_line: String,

    /// `indent_style`: tab or space, for hard or soft tabs
    #[arg(short = 's', value_name = "STYLE", default_value = DEFAULT_INDENT_STYLE)]
    indent_style: String,

    /// `insert_final_newline`: ensure files end with a newline (false: ensure they don't)
    #[arg(
        short = 'f',
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    insert_final_newline: bool,

    /// `trim_trailing_whitespace`: strip whitespace before newlines (false: keep it)
    #[arg(
        short = 't',
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    trim_trailing_whitespace: bool,

    /// Write to PATH instead of stdout (a directory means PATH/.editorconfig)
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, requires = "output")]
    force: bool,

    /// Check only (no writes), exit 1 if the file is missing or out of date
    #[arg(long, requires = "output")]
    check: bool,

    /// Show changes to the existing file in diff format
    #[arg(long, requires = "output")]
    diff: bool,

    /// Output only the affected file name
    #[arg(short, long)]
    quiet: bool,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let options = build_options(&cli);

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };
    let ctx = OutputContext::new(mode, should_use_colors(cli.color, cli.no_color));

    let config = Config {
        destination: cli
            .output
            .clone()
            .map_or(Destination::Stdout, Destination::File),
        check_only: cli.check,
        force: cli.force,
    };

    match run(&options, &config, &ctx) {
        Ok(result) => {
            if result.has_problems() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{} {e}", ctx.colors.paint(Tone::Error, "Error:"));
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("ecgen=debug"),
        _ => Some("ecgen=trace"),
    };
    if let Some(parsed) = directive.and_then(|d| d.parse().ok()) {
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_options(cli: &Cli) -> OptionSet {
    OptionSet {
        root: cli.root,
        charset: cli.charset.clone(),
        end_of_line: cli.end_of_line.clone(),
        indent_size: cli.indent_size,
        indent_style: cli.indent_style.clone(),
        insert_final_newline: cli.insert_final_newline,
        trim_trailing_whitespace: cli.trim_trailing_whitespace,
    }
}
