//! Command-line surface of `akeneo`.

use std::path::PathBuf;

use akeneo_cli::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use akeneo_cli::model::path::ResourcePath;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "akeneo", version, about = "Akeneo client.", long_about = None)]
pub struct Cli {
    /// Verbose logs output. -v for Info level and -vv for Debug level.
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// If used, logs will be silenced except for Errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The file to write the logs into. If not specified, logs go to stderr.
    #[arg(short, long, env = "AKENEO_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a resource or list a collection
    Get {
        #[command(flatten)]
        path: PathArgs,
        #[arg(short, long, default_value_t = DEFAULT_PAGE, value_name = "PAGE")]
        page: u32,
        #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_SIZE, value_name = "PER_PAGE")]
        per_page: u32,
        /// Extra query parameter, repeatable
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
        /// Search criteria as JSON
        #[arg(long)]
        search: Option<String>,
        /// Fetch every page and merge the items
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Create a resource
    Post {
        #[command(flatten)]
        path: PathArgs,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Update a resource
    Patch {
        #[command(flatten)]
        path: PathArgs,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Delete a resource
    Delete {
        #[command(flatten)]
        path: PathArgs,
    },
    /// Update several resources at once
    Bulk {
        #[command(flatten)]
        path: PathArgs,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Upload a media file
    Upload {
        #[command(subcommand)]
        target: UploadCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum UploadCmd {
    /// Attach a file to a product or product model attribute
    ProductFile {
        /// Product identifier, or product model code with --model
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        attribute: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        scope: Option<String>,
        /// Target a product model
        #[arg(long, default_value_t = false)]
        model: bool,
    },
    /// Upload an asset media file
    AssetFile {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Resource type, e.g. products, categories, assets
    pub resource: String,
    /// Use this to work on a specific resource.
    #[arg(short, long)]
    pub code: Option<String>,
    #[arg(long)]
    pub sub_type: Option<String>,
    #[arg(long, requires = "sub_type")]
    pub sub_code: Option<String>,
    #[arg(long)]
    pub sub_sub_type: Option<String>,
    #[arg(long, requires = "sub_sub_type")]
    pub sub_sub_code: Option<String>,
}

impl PathArgs {
    pub fn to_path(&self) -> ResourcePath {
        ResourcePath::from_parts(
            &self.resource,
            self.code.as_deref(),
            self.sub_type.as_deref(),
            self.sub_code.as_deref(),
            self.sub_sub_type.as_deref(),
            self.sub_sub_code.as_deref(),
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Payload as JSON
    #[arg(long, conflicts_with = "data_file")]
    pub data: Option<String>,
    /// File holding the payload
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}
