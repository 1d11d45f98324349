use crate::error::{NoParentErr, Result};
use clap::{Parser, Subcommand, ValueEnum};
use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Estimate n-tuple overlap between two documents")]
pub struct Args {
    /// The directory that relative document, synonym and config paths are
    /// resolved against
    #[clap(short, long)]
    cwd: Option<String>,

    /// The path (relative to the current working directory) where a plagcheck.toml
    /// config file may be located
    #[clap(long, default_value = "plagcheck.toml")]
    pub config_path: String,

    /// How to print results
    #[clap(short, long, value_enum, default_value_t = Reporter::Ansi)]
    pub reporter: Reporter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Compare two documents once
    Compare(CompareArgs),
    /// Read `SYNONYMS FILE1 FILE2 [N]` requests from stdin until EOF
    Interactive,
}

#[derive(Clone, Debug, clap::Args)]
pub struct CompareArgs {
    /// File of synonym sets, one set per line. Falls back to the config file.
    #[clap(short, long)]
    pub synonyms: Option<String>,

    /// The document whose tuples are searched for
    pub file1: String,

    /// The document the overlap is measured against
    pub file2: String,

    /// Words per tuple. Anything but a positive integer means the default.
    pub tuple_size: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Reporter {
    Ansi,
    Json,
}

impl Args {
    pub fn cwd(&self) -> PathBuf {
        let current = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        match &self.cwd {
            Some(c) => current.join(c.as_str()),
            None => current,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.cwd().join(self.config_path.as_str())
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        let path = self.config_path();

        path.as_path()
            .parent()
            .map(|path| path.to_path_buf())
            .context(NoParentErr { path })
    }
}
