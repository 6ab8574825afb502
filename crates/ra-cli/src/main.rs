//! `ra`: compile record accessors and print what they turned into.
//!
//! Examples:
//!   ra expr "$kubernetes['labels']['app']"
//!   ra string "plain text"
//!   ra template "pod=$kubernetes['pod_name'] host=${HOSTNAME}" --env

use std::io::{self, Write};

use facet::Facet;
use figue as args;
use ra_accessor::{
    AccessorOptions, BuildError, RecordAccessor, compile_expression, compile_string,
};
use tracing::debug;

// ============================================================================
// Exit codes
// ============================================================================

const EXIT_SUCCESS: i32 = 0;
const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_INTERNAL_ERROR: i32 = 2;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// CLI argument structures
// ============================================================================

#[derive(Facet, Debug)]
struct Args {
    /// Show version
    #[facet(args::named, args::short = 'V', default)]
    version: bool,

    /// Subcommand to run
    #[facet(args::subcommand, default)]
    command: Option<Command>,
}

#[derive(Facet, Debug)]
#[repr(u8)]
enum Command {
    /// Compile a `$key['subkey']` expression
    Expr {
        /// Expression text
        #[facet(args::positional)]
        expression: String,
    },

    /// Compile literal text
    String {
        /// Literal text
        #[facet(args::positional)]
        text: String,
    },

    /// Split a template into literal and key parts
    Template {
        /// Template text
        #[facet(args::positional)]
        pattern: String,

        /// Expand `${NAME}` from the environment first
        #[facet(args::named, default)]
        env: bool,
    },
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    if raw_args.is_empty() || raw_args[0] == "--help" || raw_args[0] == "-h" {
        print_help();
        std::process::exit(EXIT_SUCCESS);
    }

    if raw_args[0] == "--version" || raw_args[0] == "-V" {
        println!("ra {VERSION}");
        std::process::exit(EXIT_SUCCESS);
    }

    let args_strs: Vec<&str> = raw_args.iter().map(|s| s.as_str()).collect();
    match run(&args_strs) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            match &e {
                CliError::Build { error, source } => {
                    if let Some(parse_error) = error.as_parse_error() {
                        parse_error.write_report("<input>", source, io::stderr());
                    } else {
                        eprintln!("error: {e}");
                    }
                }
                _ => eprintln!("error: {e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn print_help() {
    eprintln!("ra {VERSION} - inspect record accessors\n");
    eprintln!("USAGE:");
    eprintln!("    ra <command> [args]\n");
    eprintln!("SUBCOMMANDS:");
    eprintln!("    expr <expression>               Compile a $key['subkey'] expression");
    eprintln!("    string <text>                   Compile literal text");
    eprintln!("    template <pattern> [--env]      Split and compile a template\n");
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help                      Show this message");
    eprintln!("    -V, --version                   Show version\n");
    eprintln!("Set RUST_LOG=ra_accessor=debug to trace compilation.");
}

fn parse_args(args: &[&str]) -> Result<Args, CliError> {
    figue::from_slice(args).map_err(|e| CliError::Usage(e.to_string()))
}

fn run(args: &[&str]) -> Result<(), CliError> {
    let parsed = parse_args(args)?;

    if parsed.version {
        println!("ra {VERSION}");
        return Ok(());
    }

    match parsed.command {
        Some(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            execute(command, &mut out)?;
            out.flush()?;
        }
        None => print_help(),
    }
    Ok(())
}

/// Compile what `command` names and write its dump to `out`.
fn execute<W: Write>(command: Command, mut out: W) -> Result<(), CliError> {
    match command {
        Command::Expr { expression } => {
            let accessor = compile_expression(&expression).map_err(|error| CliError::Build {
                error,
                source: expression.clone(),
            })?;
            accessor.dump_to(&mut out)?;
        }
        Command::String { text } => {
            let accessor = compile_string(&text).map_err(|error| CliError::Build {
                error,
                source: text.clone(),
            })?;
            accessor.dump_to(&mut out)?;
        }
        Command::Template { pattern, env } => {
            let options = AccessorOptions::new().translate_env(env);
            let template = RecordAccessor::with_options(&pattern, &options).map_err(|error| {
                CliError::Build {
                    error,
                    source: pattern.clone(),
                }
            })?;
            debug!(parts = template.parts().len(), "template compiled");
            template.dump_to(&mut out)?;
        }
    }
    Ok(())
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Build { error: BuildError, source: String },
    Usage(String),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Build { error, .. } if error.as_parse_error().is_some() => EXIT_SYNTAX_ERROR,
            CliError::Build { .. } => EXIT_INTERNAL_ERROR,
            CliError::Usage(_) => EXIT_SYNTAX_ERROR,
            CliError::Io(_) => EXIT_INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Build { error, .. } => write!(f, "{error}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ra_accessor::{AccessorKind, ParseError, ParseErrorKind, Span};

    fn dump(args: &[&str]) -> Result<String, CliError> {
        let command = parse_args(args)?.command.expect("a subcommand");
        let mut out = Vec::new();
        execute(command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn build_error(error: BuildError) -> CliError {
        CliError::Build {
            error,
            source: String::new(),
        }
    }

    #[test]
    fn test_exit_codes() {
        let syntax = ParseError::new(ParseErrorKind::ExpectedKey, Span::new(1, 1));
        assert_eq!(build_error(BuildError::Syntax(syntax)).exit_code(), EXIT_SYNTAX_ERROR);

        let alloc = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert_eq!(build_error(BuildError::Alloc(alloc)).exit_code(), EXIT_INTERNAL_ERROR);
        assert_eq!(
            build_error(BuildError::Incomplete(AccessorKind::Unset)).exit_code(),
            EXIT_INTERNAL_ERROR
        );
        assert_eq!(CliError::Usage("bad".into()).exit_code(), EXIT_SYNTAX_ERROR);
        assert_eq!(CliError::Io(io::Error::other("closed")).exit_code(), EXIT_INTERNAL_ERROR);
        assert_eq!(EXIT_SUCCESS, 0);
    }

    #[test]
    fn test_run_expression() {
        assert!(run(&["expr", "$a['b']"]).is_ok());
    }

    #[test]
    fn test_run_syntax_error() {
        let error = run(&["expr", "$"]).unwrap_err();
        assert!(matches!(error, CliError::Build { .. }));
        assert_eq!(error.exit_code(), EXIT_SYNTAX_ERROR);
    }

    #[test]
    fn test_expr_dump() {
        assert_eq!(
            dump(&["expr", "$kubernetes['labels']"]).unwrap(),
            "type       : KEYMAP\nkey name   : kubernetes\n - subkey  : labels\n"
        );
    }

    #[test]
    fn test_string_dump() {
        assert_eq!(
            dump(&["string", "$not parsed"]).unwrap(),
            "type       : STRING\nstring     : '$not parsed'\n"
        );
    }

    #[test]
    fn test_template_env_flag() {
        let parsed = parse_args(&["template", "x", "--env"]).unwrap();
        assert!(matches!(parsed.command, Some(Command::Template { env: true, .. })));
        let parsed = parse_args(&["template", "x"]).unwrap();
        assert!(matches!(parsed.command, Some(Command::Template { env: false, .. })));
    }

    #[test]
    fn test_template_env_translation() {
        // only this test reads the variable
        unsafe { std::env::set_var("RA_CLI_TEST_HOST", "node-1") };

        let out = dump(&["template", "host=${RA_CLI_TEST_HOST} $log", "--env"]).unwrap();
        assert!(out.contains("string     : 'host=node-1 '"), "{out}");
        assert!(out.contains("key name   : log"), "{out}");

        let error = dump(&["template", "host=${RA_CLI_TEST_HOST}"]).unwrap_err();
        assert_eq!(error.exit_code(), EXIT_SYNTAX_ERROR);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let error = run(&["frobnicate"]).unwrap_err();
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.exit_code(), EXIT_SYNTAX_ERROR);
    }
}
