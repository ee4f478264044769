//! Command-line arguments

use clap::{Parser, Subcommand};
use convertor_units::Category;

#[derive(Debug, Parser)]
#[command(name = "convertor", version)]
#[command(about = "Convert lengths, weights, temperatures and pressures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Decimal places shown in results
    #[arg(long, global = true, default_value_t = 2, env = "CONVERTOR_PRECISION",
        value_parser = clap::value_parser!(u8).range(0..=12))]
    pub precision: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Menu-driven conversion session (default)
    Interactive,

    /// Convert a single value
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit (e.g., "km", "FAHRENHEIT")
        from: String,

        /// Target unit (e.g., "mile", "CELSIUS")
        to: String,
    },

    /// List available units
    List {
        /// Only show units of this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// List categories with their base units
    Categories,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["convertor"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.precision, 2);
    }

    #[test]
    fn test_convert_negative_value() {
        let cli = Cli::try_parse_from(["convertor", "convert", "-40", "F", "C"]).unwrap();
        match cli.command {
            Some(Commands::Convert { value, from, to }) => {
                assert_eq!(value, -40.0);
                assert_eq!(from, "F");
                assert_eq!(to, "C");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["convertor", "convert", "1", "kg", "lb", "--json", "--precision", "4", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.precision, 4);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_list_category() {
        let cli = Cli::try_parse_from(["convertor", "list", "--category", "temperature"]).unwrap();
        match cli.command {
            Some(Commands::List { category }) => assert_eq!(category, Some(Category::Temperature)),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(Cli::try_parse_from(["convertor", "list", "-c", "volume"]).is_err());
    }

    #[test]
    fn test_precision_range() {
        assert!(Cli::try_parse_from(["convertor", "--precision", "13"]).is_err());
    }
}
