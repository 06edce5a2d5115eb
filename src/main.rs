use crate::config::Config;
use crate::error::{CompilerError, SyntaxError};
use crate::lexer::Lexer;
use crate::recognizer::Recognizer;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

mod config;
mod error;
mod lexer;
mod recognizer;
mod token;

#[derive(Parser)]
#[command(version, about = "Bugs Syntax Recognizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a Bugs program is syntactically well formed
    Check {
        /// Path to a .bugs file, or the name of a program in the programs directory
        program: String,
    },
    /// Check every .bugs program in the configured programs directory
    CheckAll,
    /// Print the token stream of a Bugs program
    Tokens {
        /// Path to a .bugs file, or the name of a program in the programs directory
        program: String,
    },
    /// Manage recognizer configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Initialize a new configuration file with defaults
    Init,
}

fn resolve_program(program: &str, config: &Config) -> PathBuf {
    let direct = PathBuf::from(program);
    if direct.exists() {
        direct
    } else {
        config.programs_dir.join(format!("{}.bugs", program))
    }
}

fn get_bugs_files(config: &Config) -> Result<Vec<PathBuf>, CompilerError> {
    let programs_path = &config.programs_dir;

    if !programs_path.exists() {
        return Err(CompilerError::FileNotFound(format!(
            "Programs directory not found: {}\n\nTo fix this:\n1. Create the directory\n2. Add your .bugs files there\n3. Or set BUGS_PROGRAMS_DIR in your environment",
            programs_path.display()
        )));
    }

    if !programs_path.is_dir() {
        return Err(CompilerError::FileNotFound(format!(
            "Expected {} to be a directory",
            programs_path.display()
        )));
    }

    let mut found_programs: Vec<PathBuf> = Vec::new();
    let files = fs::read_dir(programs_path).map_err(|e| {
        CompilerError::FileNotFound(format!(
            "Cannot access programs directory: {}\nError: {}",
            programs_path.display(),
            e
        ))
    })?;

    for entry in files.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("bugs") {
            found_programs.push(path);
        }
    }

    if found_programs.is_empty() {
        return Err(CompilerError::FileNotFound(format!(
            "No .bugs files found in: {}\n\nTo fix this:\n1. Add your Bugs (.bugs) programs to this directory\n2. Or set BUGS_PROGRAMS_DIR in your environment",
            programs_path.display()
        )));
    }

    found_programs.sort();
    Ok(found_programs)
}

fn check_file(path: &PathBuf) -> Result<(), CompilerError> {
    let source_code = fs::read_to_string(path).map_err(CompilerError::Io)?;

    match Recognizer::new(&source_code).is_program() {
        Ok(true) => Ok(()),
        Ok(false) => Err(CompilerError::Syntax(SyntaxError::new(
            "not a Bugs program, expected 'Allbugs' or 'Bug'".to_string(),
            1,
        ))),
        Err(err) => Err(CompilerError::Syntax(err)),
    }
}

fn dump_tokens(path: &PathBuf) -> Result<(), CompilerError> {
    let source_code = fs::read_to_string(path).map_err(CompilerError::Io)?;
    for token in Lexer::new(&source_code).tokenize() {
        println!("{}", token);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Check { program } => {
            let path = resolve_program(&program, &config);
            match check_file(&path) {
                Ok(()) => println!("{}: accepted", path.display()),
                Err(CompilerError::Syntax(err)) => {
                    println!("{}: rejected\n  {}", path.display(), err);
                    std::process::exit(1);
                }
                Err(err) => return Err(Box::new(err)),
            }
        }
        Commands::CheckAll => {
            let programs = match get_bugs_files(&config) {
                Ok(programs) => programs,
                Err(CompilerError::FileNotFound(msg)) => {
                    println!("Error: {}", msg);
                    println!("\nCurrent configuration:");
                    println!("  Environment: {}", config.env_name);
                    println!("  Programs directory: {}", config.programs_dir.display());
                    return Ok(());
                }
                Err(err) => return Err(Box::new(err)),
            };

            let mut rejected = 0;
            for path in &programs {
                match check_file(path) {
                    Ok(()) => println!("{}: accepted", path.display()),
                    Err(CompilerError::Syntax(err)) => {
                        println!("{}: rejected\n  {}", path.display(), err);
                        rejected += 1;
                    }
                    Err(err) => return Err(Box::new(err)),
                }
            }
            if rejected > 0 {
                std::process::exit(1);
            }
        }
        Commands::Tokens { program } => {
            let path = resolve_program(&program, &config);
            dump_tokens(&path)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!("Environment: {}", config.env_name);
                println!("Programs directory: {}", config.programs_dir.display());
                println!("Config file: {}", Config::get_config_path().display());
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                } else {
                    Config::default().save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
        },
    }

    Ok(())
}
