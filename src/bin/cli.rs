use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;

use reqscribe::{TranslateError, TranslateOptions, Translator, format_scripts};

/// reqscribe CLI — translate raw HTTP requests into runnable scripts.
///
/// Reads a raw HTTP request from --request, a file, or interactively and
/// prints a JSON object mapping each selected target language to a
/// self-contained script that issues the same request.
///
/// Escape sequences (\r, \n, \t, \\) in the --request value are
/// interpreted so a full request can be passed as a single shell argument.
#[derive(ClapParser)]
#[command(name = "reqscribe-cli", version, about, long_about = None)]
struct Cli {
    /// Target language(s): bash, php, python, ruby.
    /// Repeat the flag or comma-separate to generate several scripts.
    #[arg(short, long, value_delimiter = ',')]
    language: Vec<String>,

    /// Route the request through a proxy ([scheme://]host[:port]).
    /// The bare flag defaults to 127.0.0.1:8009.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "127.0.0.1:8009")]
    proxy: Option<String>,

    /// Highlight this pattern (regex allowed) in the response body.
    #[arg(short, long)]
    search_string: Option<String>,

    /// Body data to send along with the request.
    #[arg(short, long)]
    data: Option<String>,

    /// Raw HTTP request string (escape sequences \r \n \t \\ are expanded).
    #[arg(short, long, conflicts_with = "file")]
    request: Option<String>,

    /// Read the raw HTTP request from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Interactive mode: type the raw request, finish with EOF (Ctrl+D).
    #[arg(short, long)]
    interactive: bool,

    /// Pretty-print the JSON output.
    #[arg(short = 'P', long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let raw_request = if cli.interactive {
        let captured = read_interactive();
        if captured.is_empty() {
            // Immediate EOF: user-initiated cancel.
            process::exit(0);
        }
        captured
    } else if let Some(request) = &cli.request {
        unescape(request)
    } else if let Some(path) = &cli.file {
        match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Error: {}", TranslateError::MissingRequest);
        eprintln!("Provide --request, --file, or --interactive.");
        process::exit(-1);
    };

    let options = TranslateOptions {
        languages: cli.language,
        proxy: cli.proxy,
        search_string: cli.search_string,
        data: cli.data,
    };

    let translator = match Translator::new(&raw_request, options) {
        Ok(translator) => translator,
        Err(e) => exit_with(e),
    };
    let scripts = match translator.generate_scripts() {
        Ok(scripts) => scripts,
        Err(e) => exit_with(e),
    };

    println!("{}", format_scripts(&scripts, cli.pretty));
}

/// Report the error and exit: `-1` for invocation validation failures,
/// `1` for errors in the request text itself.
fn exit_with(e: TranslateError) -> ! {
    eprintln!("Error: {e}");
    process::exit(if e.is_validation() { -1 } else { 1 });
}

/// Collect a raw request from stdin, one trimmed line at a time, until EOF.
fn read_interactive() -> String {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!("Enter raw request - ");
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => lines.push(line.trim().to_string()),
            Err(_) => break,
        }
    }
    lines.join("\n").trim().to_string()
}

/// Expand C-style escape sequences (`\r`, `\n`, `\t`, `\\`) in a string.
///
/// Any other `\X` sequence is kept as-is (both the backslash and `X`).
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('r') => out.push('\r'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
