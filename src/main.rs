use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use relais::commands::{add, board, init, move_cmd, parcels, pipelines, switch};
use relais::validation::{clap_id_validator, clap_stage_validator, clap_text_validator};
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "
   ┬─┐┌─┐┬  ┌─┐┬┌─┐
   ├┬┘├┤ │  ├─┤│└─┐
   ┴└─└─┘┴─┘┴ ┴┴└─┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "relais")]
#[command(about = "Parcel pipeline board CLI", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the .relais/ data directory and seed default pipelines
    Init,

    /// Show the kanban board for the active (or a given) pipeline
    Board {
        /// Pipeline id to show instead of the active one
        #[arg(short, long)]
        pipeline: Option<i64>,
    },

    /// Create a parcel
    Add {
        /// Client name (max 500 characters)
        #[arg(value_parser = clap_text_validator)]
        client_name: String,

        /// Phone number
        #[arg(long)]
        tel: Option<String>,

        /// City
        #[arg(long)]
        ville: Option<String>,

        /// Neighborhood
        #[arg(long)]
        quartier: Option<String>,

        /// Product id (resolved against reference data)
        #[arg(long)]
        product: Option<String>,

        /// Agreed price
        #[arg(long)]
        prix: Option<String>,

        /// Number of pieces (default: 1)
        #[arg(long)]
        nb_piece: Option<u32>,

        /// Employee handling the order
        #[arg(long)]
        employee: Option<String>,

        /// Business the order came from
        #[arg(long)]
        business: Option<String>,

        /// Free-text comment (max 500 characters)
        #[arg(long, value_parser = clap_text_validator)]
        commentaire: Option<String>,

        /// Initial stage (default: the pipeline's first active stage)
        #[arg(long, value_parser = clap_stage_validator)]
        stage: Option<String>,

        /// Owning pipeline id (default: the active pipeline)
        #[arg(long)]
        pipeline: Option<i64>,

        /// Rescheduled-contact deadline (RFC 3339)
        #[arg(long)]
        date_report: Option<DateTime<Utc>>,
    },

    /// Move a parcel to another stage of its pipeline
    Move {
        /// Parcel id (alphanumeric, dash, underscore only; max 128 characters)
        #[arg(value_parser = clap_id_validator)]
        parcel_id: String,

        /// Target stage id (must be an active stage of the parcel's pipeline)
        #[arg(value_parser = clap_stage_validator)]
        stage: String,
    },

    /// Switch the active pipeline (offers the logistics handoff import)
    Switch {
        /// Pipeline id to switch to
        pipeline_id: i64,

        /// Commit the handoff import without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// List pipelines and their stages
    Pipelines,

    /// List parcels
    Parcels {
        /// Only parcels of this pipeline
        #[arg(short, long)]
        pipeline: Option<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => init::execute(),
        Commands::Board { pipeline } => board::execute(pipeline),
        Commands::Add {
            client_name,
            tel,
            ville,
            quartier,
            product,
            prix,
            nb_piece,
            employee,
            business,
            commentaire,
            stage,
            pipeline,
            date_report,
        } => add::execute(
            client_name,
            tel,
            ville,
            quartier,
            product,
            prix,
            nb_piece,
            employee,
            business,
            commentaire,
            stage,
            pipeline,
            date_report,
        ),
        Commands::Move { parcel_id, stage } => move_cmd::execute(parcel_id, stage),
        Commands::Switch { pipeline_id, yes } => switch::execute(pipeline_id, yes),
        Commands::Pipelines => pipelines::execute(),
        Commands::Parcels { pipeline } => parcels::execute(pipeline),
    }
}
