use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(about = "Phone mask and image upload preview widgets", long_about = None)]
pub struct Cli {
    /// TOML config file (labels, messages, notice timing, logging)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format phone numbers as (AA) NNNNN-NNNN
    Phone {
        /// Raw inputs; read from stdin, one per line, when omitted
        inputs: Vec<String>,
        /// Feed each input through the paste path instead of typing
        #[arg(long)]
        paste: bool,
    },
    /// Run files through the upload widget and print what it shows
    Upload {
        /// Files to select, in order
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Deliver files by drag and drop instead of the picker
        #[arg(long)]
        drop: bool,
        /// Clear the widget after the last file
        #[arg(long)]
        clear: bool,
    },
    /// Click a password show/hide toggle and print the field after each click
    Password {
        /// Number of clicks
        #[arg(long, default_value_t = 1)]
        clicks: usize,
    },
}
