use crate::api::models::SearchBy;
use crate::export::ExportFormat;
use crate::models::RangeMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for efforttrack
/// CLI client for an effort-entry timesheet backend
#[derive(Parser)]
#[command(
    name = "efforttrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track effort hours against a timesheet backend: weekly grid, saves and summaries",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration directory (useful for tests)
    #[arg(global = true, long = "conf", value_name = "DIR")]
    pub conf: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty workspace
    Init,

    /// View or edit the backend settings
    Config {
        #[arg(long = "show", help = "Print the current configuration")]
        show: bool,

        #[arg(long = "url", value_name = "URL", help = "Set the backend base URL")]
        url: Option<String>,

        #[arg(long = "email", value_name = "EMAIL", help = "Set the account email")]
        email: Option<String>,
    },

    /// Log in and store the session token
    Login {
        #[arg(
            long = "email",
            value_name = "EMAIL",
            help = "Email to authenticate with (defaults to the configured one)"
        )]
        email: Option<String>,

        #[arg(
            long = "password",
            value_name = "PASSWORD",
            help = "Password (prompted when omitted)"
        )]
        password: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Show session, range and workspace state
    Status,

    /// Switch the active range mode
    Mode {
        #[arg(long = "set", value_enum, help = "Range mode to activate")]
        set: RangeMode,

        #[arg(
            long = "date",
            value_name = "DATE",
            help = "Anchor date in yyyy-mm-dd (defaults to today)"
        )]
        date: Option<String>,

        #[arg(long = "discard", help = "Drop unsaved changes without asking")]
        discard: bool,
    },

    /// Move the weekly range backward or forward
    Week {
        #[arg(long = "prev", conflicts_with = "next", help = "Go one week back")]
        prev: bool,

        #[arg(long = "next", help = "Go one week forward")]
        next: bool,

        #[arg(long = "discard", help = "Drop unsaved changes without asking")]
        discard: bool,
    },

    /// Add, copy or delete grid rows
    Row {
        #[arg(long = "add", help = "Append a blank row")]
        add: bool,

        #[arg(long = "copy", value_name = "N", help = "Copy row N right below itself")]
        copy: Option<usize>,

        #[arg(long = "del", value_name = "N", help = "Delete row N (unsaved rows only)")]
        del: Option<usize>,
    },

    /// Edit the descriptive fields of a row
    Set {
        #[arg(long = "row", value_name = "N", help = "Row number (1-based)")]
        row: usize,

        #[arg(long = "client", value_name = "CLIENT", help = "Client code")]
        client: Option<String>,

        #[arg(long = "category", value_name = "CATEGORY", help = "Effort category")]
        category: Option<String>,

        #[arg(long = "project", value_name = "PROJECT", help = "Project code")]
        project: Option<String>,

        #[arg(long = "ticket", value_name = "TICKET", help = "Ticket number")]
        ticket: Option<String>,

        #[arg(
            long = "ticket-desc",
            value_name = "TEXT",
            help = "Ticket description"
        )]
        ticket_desc: Option<String>,

        #[arg(long = "desc", value_name = "TEXT", help = "Work description")]
        desc: Option<String>,

        #[arg(
            long = "billable",
            value_name = "YES|NO",
            help = "Mark the row billable or not"
        )]
        billable: Option<String>,
    },

    /// Set the hours of one grid cell
    Hours {
        #[arg(long = "row", value_name = "N", help = "Row number (1-based)")]
        row: usize,

        #[arg(
            long = "date",
            value_name = "DATE",
            help = "Cell date: yyyy-mm-dd, dd-mm-yyyy or a column label like '8 Sep (Mon)'"
        )]
        date: String,

        #[arg(
            long = "value",
            value_name = "HOURS",
            help = "Hours to store (0 clears the cell)"
        )]
        value: f64,
    },

    /// Print the effort grid for the active range
    Show {
        #[arg(long = "columns", help = "List the date columns instead of the grid")]
        columns: bool,
    },

    /// Show the category and project choices for a row
    Options {
        #[arg(long = "row", value_name = "N", help = "Row number (1-based)")]
        row: usize,

        #[arg(long = "refresh", help = "Bypass the cached lists")]
        refresh: bool,
    },

    /// Fetch the saved efforts for the active range
    Load {
        #[arg(long = "discard", help = "Drop unsaved changes without asking")]
        discard: bool,
    },

    /// Validate and push the grid to the backend
    Save,

    /// Read or update a ticket description
    Ticket {
        #[arg(long = "client", value_name = "CLIENT", help = "Client code")]
        client: String,

        #[arg(long = "project", value_name = "PROJECT", help = "Project code")]
        project: String,

        #[arg(long = "ticket", value_name = "TICKET", help = "Ticket number")]
        ticket: String,

        #[arg(
            long = "set",
            value_name = "TEXT",
            help = "New description (omit to read the current one)"
        )]
        set: Option<String>,
    },

    /// Aggregate saved efforts over a date range
    Summary {
        #[arg(long = "from", value_name = "DATE", help = "Range start (yyyy-mm-dd)")]
        from: String,

        #[arg(long = "to", value_name = "DATE", help = "Range end (yyyy-mm-dd)")]
        to: String,

        #[arg(
            long = "export",
            value_enum,
            value_name = "FORMAT",
            help = "Export the table (csv, json or xlsx)"
        )]
        export: Option<ExportFormat>,

        #[arg(
            long = "output",
            value_name = "FILE",
            help = "Output file for the export"
        )]
        output: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file when it exists")]
        force: bool,
    },

    /// Administrative queries and catalog maintenance
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Search efforts across accounts
    Search {
        #[arg(long = "by", value_enum, help = "Search key (client, email or both)")]
        by: SearchBy,

        #[arg(long = "client", value_name = "CLIENT", help = "Client code filter")]
        client: Option<String>,

        #[arg(long = "email", value_name = "EMAIL", help = "Account email filter")]
        email: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Range start (yyyy-mm-dd)")]
        from: String,

        #[arg(long = "to", value_name = "DATE", help = "Range end (yyyy-mm-dd)")]
        to: String,

        #[arg(
            long = "export",
            value_enum,
            value_name = "FORMAT",
            help = "Export the table (csv, json or xlsx)"
        )]
        export: Option<ExportFormat>,

        #[arg(
            long = "output",
            value_name = "FILE",
            help = "Output file for the export"
        )]
        output: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file when it exists")]
        force: bool,
    },

    /// List or maintain client codes
    Clients {
        #[arg(long = "list", help = "List the known clients")]
        list: bool,

        #[arg(long = "add", value_name = "CODE", help = "Add a client with this code")]
        add: Option<String>,

        #[arg(
            long = "name",
            value_name = "NAME",
            help = "Display name used with --add or --rename"
        )]
        name: Option<String>,

        #[arg(
            long = "rename",
            value_name = "CODE",
            help = "Rename the client with this code"
        )]
        rename: Option<String>,

        #[arg(
            long = "del",
            value_name = "CODE",
            help = "Delete the client with this code"
        )]
        del: Option<String>,
    },

    /// List or maintain the projects of a client
    Projects {
        #[arg(
            long = "client",
            value_name = "CLIENT",
            help = "Client code the projects belong to"
        )]
        client: String,

        #[arg(long = "list", help = "List the client's projects")]
        list: bool,

        #[arg(long = "add", value_name = "CODE", help = "Add a project with this code")]
        add: Option<String>,

        #[arg(long = "name", value_name = "NAME", help = "Display name used with --add")]
        name: Option<String>,

        #[arg(
            long = "del",
            value_name = "CODE",
            help = "Delete the project with this code"
        )]
        del: Option<String>,
    },

    /// List or maintain the task types of a client
    TaskTypes {
        #[arg(
            long = "client",
            value_name = "CLIENT",
            help = "Client code the task types belong to"
        )]
        client: String,

        #[arg(long = "list", help = "List the client's task types")]
        list: bool,

        #[arg(
            long = "add",
            value_name = "CODE",
            help = "Add a task type with this code"
        )]
        add: Option<String>,

        #[arg(
            long = "del",
            value_name = "CODE",
            help = "Delete the task type with this code"
        )]
        del: Option<String>,
    },

    /// Read or change an account role
    Roles {
        #[arg(long = "email", value_name = "EMAIL", help = "Account email")]
        email: String,

        #[arg(
            long = "set",
            value_name = "ROLE",
            help = "New role (omit to read the current one)"
        )]
        set: Option<String>,
    },
}
