use tablestruct_cli::{gen, metadata, support};
use tablestruct_codegen::{parse_path, Config, DescribeOptions};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate accessors from a JSON mapping description
    Gen {
        /// Mapping description; reads stdin when omitted
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Destination file; writes stdout when omitted
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Module the generated code imports `Scanner` from
        #[clap(long, default_value = "super::support")]
        support_path: String,

        /// Module the generated code imports record types from
        #[clap(long, default_value = "super")]
        records_path: String,

        /// Skip rustfmt
        #[clap(long)]
        no_fmt: bool,
    },

    /// Print the mapping description of a record declaration
    Metadata {
        /// Name of the record type
        record: String,

        /// Rust source declaring the record; reads stdin when omitted
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Destination file; writes stdout when omitted
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Table name; defaults to the snake-cased record name
        #[clap(long)]
        table: Option<String>,

        /// Primary key field
        #[clap(long, default_value = "id")]
        pk: String,

        /// Whether the database generates the primary key
        #[clap(long)]
        auto_pk: bool,
    },

    /// Generate the support module shared by all accessors
    Support {
        #[clap(short, long)]
        output: Option<PathBuf>,

        #[clap(long)]
        no_fmt: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Gen {
            input,
            output,
            support_path,
            records_path,
            no_fmt,
        } => {
            let config = Config::new()
                .support_path(parse_path(&support_path)?)
                .records_path(parse_path(&records_path)?)
                .rustfmt(!no_fmt);

            gen::exec(input.as_deref(), output.as_deref(), &config)
        }
        Command::Metadata {
            record,
            input,
            output,
            table,
            pk,
            auto_pk,
        } => {
            let mut options = DescribeOptions::new().pk(pk).auto_pk(auto_pk);

            if let Some(table) = table {
                options = options.table(table);
            }

            metadata::exec(&record, input.as_deref(), output.as_deref(), &options)
        }
        Command::Support { output, no_fmt } => {
            support::exec(output.as_deref(), &Config::new().rustfmt(!no_fmt))
        }
    }
}
