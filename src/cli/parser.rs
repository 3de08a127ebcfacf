use clap::{Parser, Subcommand};

/// Command-line interface definition for rtally
/// CLI application to keep named tally counters in a synced JSON store
#[derive(Parser)]
#[command(
    name = "rtally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple tally counter CLI: named groups rendered as classic bundles of five",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a custom store document)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store document
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Show or set the persisted username
    Name {
        /// New username; prompts interactively when omitted and unset
        #[arg(long = "set", value_name = "NAME")]
        set: Option<String>,
    },

    /// Create a new tally group
    Add {
        /// Display label (trimmed; must not be empty)
        label: String,

        /// Palette color for the group (name or hex); cycled from the
        /// palette when omitted
        #[arg(long = "color", value_name = "COLOR")]
        color: Option<String>,
    },

    /// Add one tally to a group
    Tally {
        /// Group id (see `rtally list`)
        id: u32,
    },

    /// Clear all tallies of a group (the group itself survives)
    Reset {
        /// Group id
        id: u32,
    },

    /// Delete a group and its tallies
    Del {
        /// Group id
        id: u32,
    },

    /// Change a group's color
    Color {
        /// Group id
        id: u32,

        /// Palette entry (name or hex); shows the palette and asks when
        /// omitted
        color: Option<String>,
    },

    /// Rename a group
    Rename {
        /// Group id
        id: u32,

        /// New label; opens an edit prompt pre-seeded with the current
        /// label when omitted
        label: Option<String>,
    },

    /// Render all tally groups
    List,

    /// Print or manage the internal operation log
    Log {
        #[arg(long = "print", help = "Print the operation log")]
        print: bool,
    },

    /// Create a backup copy of the store document
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
