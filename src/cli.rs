// src/cli.rs
//! Command-line front end: `tcgp_scrape [-v] <scrape|parse|collections>`.

use std::{fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{consts::*, AppSettings, OutputOptions, ScrapeOptions},
    file,
    progress::Progress,
    scrape,
    specs::Site,
};

#[derive(Debug, Parser)]
#[command(name = "tcgp_scrape", version, about = "Pokémon TCG Pocket card scraper")]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every configured collection and write the cards as JSON.
    Scrape {
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        config: PathBuf,
        #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Site::Serebii)]
        site: Site,
        /// Only these collection codes (repeatable).
        #[arg(long = "collection", value_name = "CODE")]
        collections: Vec<String>,
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        #[command(flatten)]
        json: JsonArgs,
    },
    /// Assemble one saved card page and print it as JSON.
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Site::Serebii)]
        site: Site,
        #[command(flatten)]
        json: JsonArgs,
    },
    /// List configured collections as `code,name,cardCount`.
    Collections {
        #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
        config: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct JsonArgs {
    /// Single-line JSON.
    #[arg(long)]
    compact: bool,
    /// Write `null` members instead of leaving them out.
    #[arg(long)]
    keep_nulls: bool,
}

impl JsonArgs {
    fn output(&self, path: PathBuf) -> OutputOptions {
        OutputOptions { path, pretty: !self.compact, omit_null: !self.keep_nulls }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scrape { config, out, site, collections, base_url, json } => {
            let settings = AppSettings::load(&config)
                .wrap_err_with(|| s!("loading {}", config.display()))?;
            let opts = ScrapeOptions { site, base_url, collections };
            let output = json.output(out);

            let mut progress = CliProgress::default();
            let report = scrape::run(&settings, &opts, Some(&mut progress))?;
            let path = file::write_cards(&report.cards, &output)?;

            println!("Data extraction complete. Output saved to {}.", path.display());
        }
        Command::Parse { file: page, site, json } => {
            let html = fs::read_to_string(&page)
                .wrap_err_with(|| s!("reading {}", page.display()))?;
            let card = scrape::parse_card(&html, &site.strategy())?;
            let output = json.output(PathBuf::new());
            println!("{}", file::to_json(std::slice::from_ref(&card), &output)?);
        }
        Command::Collections { config } => {
            let settings = AppSettings::load(&config)
                .wrap_err_with(|| s!("loading {}", config.display()))?;
            for c in &settings.collections {
                println!("{},{},{}", c.code, c.name, c.card_count);
            }
        }
    }
    Ok(())
}

/// Logs a running tally; per-card lines come from the fetch loop itself.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, _number: u32, _name: &str) {
        self.done += 1;
        self.tick();
    }

    fn item_failed(&mut self, _number: u32) {
        self.failed += 1;
        self.tick();
    }

    fn finish(&mut self) {
        logf!("Done: {} ok, {} failed, {} planned", self.done, self.failed, self.total);
    }
}

impl CliProgress {
    fn tick(&self) {
        let seen = self.done + self.failed;
        if seen % 50 == 0 {
            logd!("{seen}/{} pages", self.total);
        }
    }
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
    fn scrape_flags() {
        let cli = Cli::try_parse_from([
            "tcgp_scrape", "-vv", "scrape", "--collection", "A1", "--collection", "a2",
            "--out", "data/cards.json", "--compact",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Scrape { collections, out, json, site, base_url, .. } => {
                assert_eq!(collections, vec!["A1", "a2"]);
                assert_eq!(out, PathBuf::from("data/cards.json"));
                assert_eq!(site, Site::Serebii);
                assert_eq!(base_url, DEFAULT_BASE_URL);
                let o = json.output(out);
                assert!(!o.pretty);
                assert!(o.omit_null);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_requires_file() {
        assert!(Cli::try_parse_from(["tcgp_scrape", "parse"]).is_err());
        let cli = Cli::try_parse_from(["tcgp_scrape", "parse", "page.shtml", "--keep-nulls"]).unwrap();
        assert!(matches!(cli.command, Command::Parse { json: JsonArgs { keep_nulls: true, .. }, .. }));
    }
}
