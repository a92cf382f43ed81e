mod stats;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use salary_scraper::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List of job boards to build a salary table for, all of them if omitted
    #[arg(long, value_enum)]
    site: Vec<Target>,

    /// Languages to search for, replaces the default list
    #[arg(long)]
    language: Vec<String>,

    /// Number of languages fetched concurrently per board
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Headhunter,
    Superjob,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if !self.language.is_empty() {
            config.languages = self.language.clone();
        }
        config.workers = self.workers;
        config
    }

    fn targets(&self) -> Vec<Target> {
        if self.site.is_empty() {
            vec![Target::Headhunter, Target::Superjob]
        } else {
            self.site.clone()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = args.config();
    match stats::print_tables(&config, &args.targets()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to build salary tables: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
