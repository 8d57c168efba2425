use crate::error::DefangError;
use crate::executor::{InterpreterConfig, DEFAULT_INTERPRETER};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "defang")]
#[command(about = "Rewrite eval to print in a PHP file, run it, and capture what it would have executed")]
#[command(long_about = None)]
#[command(after_help = "Options are only recognized before PATH. Put `--` before a PATH that starts with '-'.")]
#[command(version)]
pub struct Cli {
    /// Interpreter used to run the sanitized file
    #[arg(short = 'i', long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including spawned commands
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// PHP file to inspect
    pub path: Option<PathBuf>,

    /// Anything after the path is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn validate(&self) -> Result<(), DefangError> {
        self.interpreter_config().validate()
    }

    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig::new(self.interpreter.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.is_debug() {
            log::LevelFilter::Debug
        } else if self.is_verbose() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Off
        }
    }
}
