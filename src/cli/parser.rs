use clap::{Parser, Subcommand};

/// Command-line interface definition for summitq
/// CLI toolkit to compose summit-admin REST filter queries and reconcile
/// event schedules
#[derive(Parser)]
#[command(
    name = "summitq",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compose summit-admin REST filter queries and reconcile event schedules",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or alternate profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List queryable entities and their searchable fields
    Fields {
        #[arg(long, help = "Show a single entity (e.g. promo-codes, speakers)")]
        entity: Option<String>,
    },

    /// Build the filter[] query parameters for an entity listing
    Query {
        /// Target entity (promo-codes, speakers, sponsors, ...)
        #[arg(long)]
        entity: String,

        /// Equality filter, FIELD=VALUE or FIELD=V1,V2 (repeatable; the
        /// value ALL disables the dimension)
        #[arg(long = "eq", value_name = "FIELD=VALUES")]
        eq: Vec<String>,

        /// Free-text search term, matched across the entity's searchable fields
        #[arg(long)]
        term: Option<String>,

        /// Clause combination mode: all (AND) or any (OR); defaults to the
        /// configured mode
        #[arg(long)]
        mode: Option<String>,

        /// Lower datetime bound (YYYY-MM-DD or the configured format)
        #[arg(long, value_name = "DATETIME")]
        from: Option<String>,

        /// Upper datetime bound
        #[arg(long, value_name = "DATETIME")]
        to: Option<String>,

        /// Field the lower bound applies to
        #[arg(long = "from-field", value_name = "FIELD", default_value = "start_date")]
        from_field: String,

        /// Field the upper bound applies to
        #[arg(long = "to-field", value_name = "FIELD", default_value = "end_date")]
        to_field: String,

        /// Selection-status values, comma separated (speakers)
        #[arg(long = "selection-status", value_name = "VALUES")]
        selection_status: Option<String>,

        /// Media-upload-type ids, comma separated (speakers)
        #[arg(long = "media-upload-type", value_name = "IDS")]
        media_upload_type: Option<String>,

        /// Media-upload-type match semantics: any (||) or all (&&)
        #[arg(long = "media-match", value_name = "MODE", default_value = "any")]
        media_match: String,

        /// Print the clause list as a JSON array
        #[arg(long)]
        json: bool,

        /// Print a full request-URL preview instead of filter[] lines
        #[arg(long)]
        url: bool,
    },

    /// Apply field edits to an entity snapshot and reconcile its schedule
    Reconcile {
        /// Path to the entity snapshot (JSON)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// New start date (YYYY-MM-DD or the configured format)
        #[arg(long, value_name = "DATETIME", conflicts_with = "clear_start")]
        start: Option<String>,

        /// Clear the start date ("no date")
        #[arg(long = "clear-start")]
        clear_start: bool,

        /// New end date
        #[arg(long, value_name = "DATETIME", conflicts_with = "clear_end")]
        end: Option<String>,

        /// Clear the end date
        #[arg(long = "clear-end")]
        clear_end: bool,

        /// New duration in minutes (accepts 90, 90m, 1h30m)
        #[arg(long, value_name = "MINUTES")]
        duration: Option<String>,

        /// Print only the updated snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Write the updated snapshot back to FILE
        #[arg(long)]
        write: bool,
    },
}
