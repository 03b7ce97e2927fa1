use std::fs;

use clap::Parser;
use statica::{
    eval_expression, run_program, run_script,
    interpreter::{
        constants::ConstantBindings,
        lexer::tokenize,
        parser::parse_expression,
        runtime::ConsoleRuntime,
    },
};

/// statica interprets a small, statically typed expression and statement
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells statica to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Treats the source as a flat statement script, wrapping it into an
    /// implicit main function instead of expecting def declarations.
    #[arg(short, long)]
    script: bool,

    /// Evaluates the source as a single expression and prints its value.
    #[arg(short, long)]
    expression: bool,

    /// Binds a named constant, as NAME=EXPRESSION; may be repeated.
    #[arg(short, long = "constant", value_name = "NAME=EXPRESSION")]
    constants: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let constants = match parse_constants(&args.constants) {
        Ok(constants) => constants,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let mut runtime = ConsoleRuntime;

    let result = if args.expression {
        eval_expression(&source, &constants, &mut runtime).map(|value| println!("{value}"))
    } else if args.script {
        run_script(&source, &constants, &mut runtime)
    } else {
        run_program(&source, &constants, &mut runtime)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parses `NAME=EXPRESSION` bindings from the command line.
fn parse_constants(bindings: &[String]) -> Result<ConstantBindings, Box<dyn std::error::Error>> {
    let mut constants = ConstantBindings::new();
    for binding in bindings {
        let Some((name, expression)) = binding.split_once('=') else {
            return Err(format!("Constant binding '{binding}' is not of the form NAME=EXPRESSION.").into());
        };
        let tokens = tokenize(expression)?;
        constants.insert(name.trim().to_string(), parse_expression(&tokens)?);
    }
    Ok(constants)
}
