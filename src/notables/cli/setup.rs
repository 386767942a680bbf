use clap::{Args, Parser, Subcommand};
use notables::model::Language;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for builds made inside a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notables", bin_name = "notables", version = get_version())]
#[command(about = "Browse a multilingual directory of notable personalities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Collection JSON to load instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Display language: en, fr or ar
    #[arg(short, long, global = true, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Domain tag (e.g. Music, Literature) or "all"
    #[arg(long)]
    pub domain: Option<String>,

    /// Digits the birth year must contain
    #[arg(long)]
    pub birth_year: Option<String>,

    /// Digits the death year must contain
    #[arg(long)]
    pub death_year: Option<String>,

    /// all, alive or deceased
    #[arg(long)]
    pub status: Option<String>,

    /// all, male or female
    #[arg(long)]
    pub gender: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List personalities, one page at a time
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show the detail page of one personality
    #[command(alias = "v")]
    Show {
        /// Personality id
        id: u32,
    },

    /// Generate an AI summary of one biography
    Summary {
        /// Personality id
        id: u32,
    },

    /// Interactive browsing session
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from([
            "notables",
            "list",
            "--domain",
            "Music",
            "--birth-year",
            "19",
            "--page",
            "2",
            "--lang",
            "ar",
        ])
        .unwrap();

        assert_eq!(cli.lang, Some(Language::Ar));
        match cli.command {
            Some(Commands::List { filters, page }) => {
                assert_eq!(filters.domain.as_deref(), Some("Music"));
                assert_eq!(filters.birth_year.as_deref(), Some("19"));
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["notables", "show", "7", "--data", "people.json", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("people.json")));
        assert!(matches!(cli.command, Some(Commands::Show { id: 7 })));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["notables", "--lang", "de"]).is_err());
    }
}
