use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use stockroom::config::DEFAULT_CONFIG_FILE;
use stockroom::view::SortField;

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(about = "Keep a small inventory in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Data file to use instead of the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Skip lines with malformed numbers instead of reading them as 0
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, sorted and paged
    #[command(alias = "ls")]
    List {
        /// Sort by id, name, category, supplier, quantity or price
        #[arg(short, long)]
        sort: Option<SortField>,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show one item
    Get { id: u64 },

    /// Add an item
    #[command(alias = "new")]
    Add(AddArgs),

    /// Change fields of an item (omitted fields keep their value)
    Update {
        id: u64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove { id: u64 },

    /// Find items whose name contains a term (case-insensitive)
    Search {
        #[arg(default_value = "")]
        term: String,
    },

    /// Items with quantity at or below a threshold
    LowStock {
        #[arg(allow_negative_numbers = true)]
        threshold: i64,
    },

    /// Merge items from a CSV file into the inventory
    Import { path: PathBuf },

    /// Write the inventory to a CSV file
    Export {
        /// Destination (defaults to a timestamped file)
        path: Option<PathBuf>,
    },

    /// Get or set settings
    Config {
        /// data-file, page-size, autosave or sort
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },

    /// Interactive menu
    Menu,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub supplier: String,

    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub quantity: i64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub supplier: Option<String>,

    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_negative_quantity() {
        let cli = Cli::parse_from([
            "stockroom", "add", "--name", "Bolt", "--quantity", "-3", "--price", "0.1",
        ]);
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.name, "Bolt");
                assert_eq!(args.quantity, -3);
                assert_eq!(args.category, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_list_sort_field() {
        let cli = Cli::parse_from(["stockroom", "list", "--sort", "price", "-p", "2"]);
        match cli.command {
            Some(Commands::List { sort, page, .. }) => {
                assert_eq!(sort, Some(SortField::Price));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["stockroom", "list", "--sort", "weight"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from(["stockroom", "search", "bolt", "--data", "x.csv", "-vv"]);
        assert_eq!(cli.data, Some(PathBuf::from("x.csv")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("config.json"));
    }
}
