//! # Sovy
//!
//! The Sovy command line: runs, formats and manages libraries for
//! Solara programs.

mod cli;

use cli::*;

use std::error::Error;
use std::fs;

use colored::Colorize;
use log::info;

use sovy_lang::evaluator::Evaluator;
use sovy_lang::formatter;
use sovy_lang::lexer::Lexer;
use sovy_lang::library::FsLibraryRegistry;
use sovy_lang::parser::Parser;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into())?;

    match args.command {
        Commands::Run(run_args) => run_file(&run_args),
        Commands::Fmt(fmt_args) => format_file(&fmt_args),
        Commands::Install(install_args) => install_library(&install_args.library),
        Commands::List => list_libraries(),
    }
}

fn run_file(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(&args.file)?;

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("{}", "Erros de sintaxe encontrados:".red());
        for error in parser.errors() {
            eprintln!("  {error}");
        }

        if program.statements.is_empty() {
            std::process::exit(1);
        }
        eprintln!("Tentando executar o que foi possível...");
    }

    if args.dump_ast {
        info!("AST:\n{program:#?}");
    }

    let mut evaluator = Evaluator::new();
    let result = evaluator.eval(&program);

    if result.is_error() {
        eprintln!("{} {result}", "Erro de execução:".red());
        std::process::exit(1);
    }

    Ok(())
}

fn format_file(args: &FmtArgs) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(&args.file)?;

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("{}", "Erros de sintaxe encontrados:".red());
        for error in parser.errors() {
            eprintln!("  {error}");
        }
        std::process::exit(1);
    }

    let formatted = formatter::format_program(&program)?;

    if args.in_place {
        fs::write(&args.file, formatted)?;
        println!("Arquivo '{}' formatado com sucesso!", args.file.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

fn install_library(library: &str) -> Result<(), Box<dyn Error>> {
    let registry = FsLibraryRegistry::new();

    match registry.install(library) {
        Ok(file) => {
            println!("Biblioteca '{library}' instalada com sucesso!");
            println!("Local: {}", file.display());
            Ok(())
        }
        Err(error) => {
            eprintln!("{} {error}", "Erro ao instalar biblioteca:".red());
            std::process::exit(1);
        }
    }
}

fn list_libraries() -> Result<(), Box<dyn Error>> {
    let registry = FsLibraryRegistry::new();
    let libraries = registry.installed_libraries();

    if libraries.is_empty() {
        println!("Nenhuma biblioteca instalada.");
        println!("Use 'sovy install <biblioteca>' para instalar bibliotecas.");
        return Ok(());
    }

    println!("Bibliotecas instaladas:");
    for library in libraries {
        println!("  {library}");
    }

    Ok(())
}
