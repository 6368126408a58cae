use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use shelf::model::{Genre, Rating, SearchField, Status};
use shelf::query::BookFilter;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Keep track of the books you own, read and rate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global library instead of the one in this directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// More diagnostics on stderr (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format for listings
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Genre/status/rating filters shared by `list` and `stats`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only books in these genres (repeat or comma-separate)
    #[arg(long = "genre", value_delimiter = ',')]
    pub genres: Vec<Genre>,

    /// Only books with these reading statuses (repeat or comma-separate)
    #[arg(long = "status", value_delimiter = ',')]
    pub statuses: Vec<Status>,

    /// Only books rated at least this (0-5)
    #[arg(long)]
    pub min_rating: Option<Rating>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> BookFilter {
        BookFilter::new()
            .with_genres(self.genres.clone())
            .with_statuses(self.statuses.clone())
            .with_min_rating(self.min_rating.unwrap_or_default())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library
    #[command(alias = "a")]
    Add {
        /// Book title
        title: String,

        /// Author
        author: String,

        #[arg(long, default_value_t = Genre::default())]
        genre: Genre,

        /// Reading status
        #[arg(long, default_value_t = Status::default())]
        status: Status,

        /// Rating from 0 to 5
        #[arg(long, default_value_t = Rating::default())]
        rating: Rating,

        /// Date added, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List books, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search one field for a piece of text
    Search {
        /// Text to look for (case-insensitive)
        #[arg(num_args = 0..)]
        term: Vec<String>,

        /// Field to search (defaults to the configured search-field)
        #[arg(long = "by")]
        field: Option<SearchField>,
    },

    /// Show every field of one or more books
    #[command(alias = "v")]
    View {
        /// Indexes (e.g. 1 3) or a title
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of a book
    #[command(aliases = ["e", "update"])]
    Edit {
        /// Index or title of the book
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        genre: Option<Genre>,

        #[arg(long)]
        status: Option<Status>,

        #[arg(long)]
        rating: Option<Rating>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove one or more books
    #[command(alias = "rm")]
    Delete {
        /// Indexes (e.g. 1 3) or a title
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Library statistics, optionally over a filtered set
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the path of the catalog file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, search-field)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the library directory
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::try_parse_from([
            "shelf",
            "add",
            "Dune",
            "Frank Herbert",
            "--genre",
            "science-fiction",
            "--status",
            "On Hold",
            "--rating",
            "4",
            "--date",
            "2024-03-09",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add {
                title,
                genre,
                status,
                rating,
                date,
                ..
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(genre, Genre::ScienceFiction);
                assert_eq!(status, Status::OnHold);
                assert_eq!(rating.value(), 4);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert!(Cli::try_parse_from(["shelf", "add", "A", "B", "--rating", "6"]).is_err());
    }

    #[test]
    fn list_filters_accept_lists() {
        let cli = Cli::try_parse_from([
            "shelf",
            "ls",
            "--genre",
            "fiction,mystery",
            "--status",
            "reading",
            "--min-rating",
            "2",
        ])
        .unwrap();

        let Some(Commands::List { filter }) = cli.command else {
            panic!("expected list");
        };
        let filter = filter.to_filter();
        assert_eq!(filter.genres, vec![Genre::Fiction, Genre::Mystery]);
        assert_eq!(filter.statuses, vec![Status::Reading]);
        assert_eq!(filter.min_rating.value(), 2);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shelf", "list", "-g", "-vv", "--output", "json"]).unwrap();
        assert!(cli.global);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
