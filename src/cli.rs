//! Command-line surface, `clap`'s derive API.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "domtypo")]
#[command(about = "A multilingual typosquatting permutation engine and enrichment pipeline")]
#[command(version)]
pub struct Cli {
    /// Target domain(s) to generate look-alikes for.
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Language codes to activate.
    #[arg(short = 'l', long = "languages", value_delimiter = ',', default_value = "en")]
    pub languages: Vec<String>,

    /// Keyboard codes to activate.
    #[arg(short = 'k', long = "keyboards", value_delimiter = ',', default_value = "all")]
    pub keyboards: Vec<String>,

    /// Algorithm codes to run.
    #[arg(short = 't', long = "typos", value_delimiter = ',', default_value = "all")]
    pub typos: Vec<String>,

    /// Collector codes to run.
    #[arg(short = 'i', long = "info", value_delimiter = ',', default_value = "all")]
    pub info: Vec<String>,

    /// Worker count per parallel pipeline stage.
    #[arg(short = 'c', long = "concurrency", default_value_t = 50)]
    pub concurrency: usize,

    /// Base pacing between collector calls, in milliseconds.
    #[arg(long = "delay", default_value_t = 0)]
    pub delay: u64,

    /// Bypass cache reads/writes.
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Emit only live variants.
    #[arg(long = "online")]
    pub online: bool,

    /// Enable progress reporting.
    #[arg(short = 'p', long = "progress")]
    pub progress: bool,

    /// Output file; stdout if omitted.
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Output format: text, json, csv, html.
    #[arg(short = 'o', long = "format", default_value = "text")]
    pub format: String,

    /// GeoIP (MaxMind-format) database path, enables the `geo` collector.
    #[arg(long = "geo-db")]
    pub geo_db: Option<String>,

    /// Enable the WHOIS collector (disabled by default: slow, one TCP
    /// round-trip per variant against a different server per TLD).
    #[arg(long = "whois")]
    pub whois: bool,

    /// Emit tracing spans/events at stage boundaries and inside collectors.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::parse_from(["domtypo", "google.com"]);
        assert_eq!(cli.targets, vec!["google.com".to_string()]);
        assert_eq!(cli.languages, vec!["en".to_string()]);
        assert_eq!(cli.typos, vec!["all".to_string()]);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn parses_csv_lists() {
        let cli = Cli::parse_from(["domtypo", "-l", "en,es", "-t", "co,cs", "example.com"]);
        assert_eq!(cli.languages, vec!["en".to_string(), "es".to_string()]);
        assert_eq!(cli.typos, vec!["co".to_string(), "cs".to_string()]);
    }
}
