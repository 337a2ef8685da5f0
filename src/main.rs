use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser as ClapParser;
use minic::{
    ast::printer::render_tree,
    lexer::lexer::{tokenize, Lexer},
    parser::{
        lookups::MINIC_TABLE,
        parser::{parse, ParserConfig, DEFAULT_MAX_DEPTH},
    },
    render_error,
};

#[derive(ClapParser)]
#[command(name = "minic")]
#[command(about = "Parses a Mini C source file and prints its syntax tree")]
struct Args {
    /// Path to the Mini C file to parse
    file: PathBuf,

    /// Maximum parser stack depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();

    if args.tokens {
        match tokenize(source.clone(), Some(file_name.clone())) {
            Ok(tokens) => tokens.iter().for_each(|token| token.debug()),
            Err(err) => {
                eprint!("{}", render_error(&err, &source));
                return ExitCode::FAILURE;
            }
        }
    }

    let start = Instant::now();
    let config = ParserConfig {
        max_depth: args.max_depth,
        ..ParserConfig::default()
    };
    let (parser, result) = parse(Lexer::new(source.clone(), Some(file_name)), &MINIC_TABLE, config);

    println!("Parsed in {:?}", start.elapsed());

    for err in parser.syntax_errors() {
        eprint!("{}", render_error(err, &source));
    }

    match result {
        Ok(ast) => {
            print!("{}", render_tree(&ast));
            if parser.syntax_errors().is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            ExitCode::FAILURE
        }
    }
}
