//! CLI for xurls.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xurls_core::config::{self, DiscoverSettings, XurlsConfig};
use xurls_core::ingest::InputSources;
use xurls_core::logging::LogOptions;

use commands::{run_completions, run_extract, run_man, run_parse};

const PARSE_HELP: &str = "\
Modes:
  domains    the hostname (e.g. sub.example.com)
  apexes     the apex domain (e.g. example.com from sub.example.com)
  paths      the request path (e.g. /users)
  query      key=value pairs from the query string (one per line)
  params     keys from the query string (one per line)
  values     values from the query string (one per line)
  format     custom format (see below)

Format directives:
  %%         a literal percent character
  %s         the request scheme (e.g. https)
  %u         the user info (e.g. user:pass)
  %d         the domain (e.g. sub.example.com)
  %S         the subdomain (e.g. sub)
  %r         the root of domain (e.g. example)
  %t         the TLD (e.g. com)
  %P         the port (e.g. 8080)
  %p         the path (e.g. /users)
  %e         the path's file extension (e.g. jpg, html)
  %q         the raw query string (e.g. a=1&b=2)
  %f         the page fragment (e.g. page-section)
  %@         inserts an @ if user info is specified
  %:         inserts a colon if a port is specified
  %?         inserts a question mark if a query string exists
  %#         inserts a hash if a fragment exists
  %a         authority (alias for %u%@%d%:%P)

Examples:
  xurls parse domains -u https://sub.example.com
  xurls parse format \"Root: %r, TLD: %t\" -u https://sub.example.com
  cat urls.txt | xurls parse params --unique";

/// Top-level CLI for xurls.
#[derive(Debug, Parser)]
#[command(name = "xurls", version)]
#[command(about = "xurls: pull URLs out of text and bits out of URLs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output and logging flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Only print results; log errors only.
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored log output.
    #[arg(long, global = true)]
    pub monochrome: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse URLs and print chosen components.
    #[command(visible_aliases = ["dissect", "p"], after_help = PARSE_HELP)]
    Parse {
        /// What to print: domains, apexes, paths, query, params, values or format.
        mode: String,

        /// Directive template (required for `format`).
        format: Option<String>,

        /// Target URL; repeat the flag or separate with commas.
        #[arg(short = 'u', long = "url", value_name = "URL", value_delimiter = ',')]
        urls: Vec<String>,

        /// File containing one URL per line.
        #[arg(short, long, value_name = "PATH")]
        list: Option<PathBuf>,

        /// Number of concurrent workers (default from config, 30).
        #[arg(short, long, value_name = "N")]
        concurrency: Option<usize>,

        /// Print each distinct value once.
        #[arg(long)]
        unique: bool,

        /// Scheme assumed for input without one (default from config, http).
        #[arg(long, value_name = "SCHEME")]
        default_scheme: Option<String>,
    },

    /// Find URLs in free text read from stdin or a file.
    #[command(visible_aliases = ["discover", "e"])]
    Extract {
        /// File to scan instead of (or before) stdin.
        #[arg(short, long, value_name = "PATH")]
        list: Option<PathBuf>,

        /// Number of concurrent workers (default from config, 30).
        #[arg(short, long, value_name = "N")]
        concurrency: Option<usize>,

        /// Print each distinct URL once.
        #[arg(long)]
        unique: bool,

        /// Only match URLs with an explicit scheme.
        #[arg(long)]
        with_scheme: bool,

        /// Only match URLs whose scheme matches this regex.
        #[arg(long, value_name = "REGEX")]
        with_scheme_pattern: Option<String>,

        /// Only match URLs with a host.
        #[arg(long)]
        with_host: bool,

        /// Only match URLs whose host matches this regex.
        #[arg(long, value_name = "REGEX")]
        with_host_pattern: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbose: self.global.verbose,
            silent: self.global.silent,
            monochrome: self.global.monochrome,
            log_file: self.global.log_file.clone(),
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Parse {
                mode,
                format,
                urls,
                list,
                concurrency,
                unique,
                default_scheme,
            } => {
                let mut cfg = load_config();
                if let Some(n) = concurrency {
                    cfg.concurrency = n;
                }
                if unique {
                    cfg.unique = true;
                }
                if let Some(scheme) = default_scheme {
                    cfg.default_scheme = scheme;
                }
                let sources = InputSources::with_piped_stdin(urls, list);
                run_parse(&cfg, &mode, format.as_deref(), sources).await?;
            }
            CliCommand::Extract {
                list,
                concurrency,
                unique,
                with_scheme,
                with_scheme_pattern,
                with_host,
                with_host_pattern,
            } => {
                let mut cfg = load_config();
                if let Some(n) = concurrency {
                    cfg.concurrency = n;
                }
                if unique {
                    cfg.unique = true;
                }
                let settings = DiscoverSettings {
                    with_scheme,
                    scheme_pattern: with_scheme_pattern,
                    with_host,
                    host_pattern: with_host_pattern,
                    ..DiscoverSettings::new(&cfg)?
                };
                let sources = InputSources::with_piped_stdin(Vec::new(), list);
                run_extract(&settings, sources).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Config file defaults; a missing or broken config location is not fatal.
fn load_config() -> XurlsConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("using built-in defaults, config unavailable: {:#}", err);
            XurlsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
