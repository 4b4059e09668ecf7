mod analysis;
mod api;
mod cache;
mod config;
mod date_range;
mod display;
mod error;
mod report;

use anyhow::Context;
use api::client::RiotApiClient;
use api::endpoints::MatchIdQuery;
use api::MatchSource;
use cache::IconCache;
use chrono::NaiveDate;
use clap::Parser;
use config::Config;
use date_range::{parse_date, DateRange};
use display::html::render_page;
use display::icons::IconResolver;
use display::output::{display_error, display_info, display_match_history, display_success, display_warning};
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Quick Match")]
#[command(about = "Render a player's tournament games as blue vs red HTML cards", long_about = None)]
struct Args {
    /// Riot Game Name
    game_name: String,

    /// Riot Tag (tag line)
    tag_line: String,

    /// Number of games to fetch (1-100)
    #[arg(short = 'n', long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..=100))]
    count: u16,

    /// Only games played on or after this day (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Only games played on or before this day (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Region or regional route (default: RIOT_REGION or euw1)
    #[arg(short, long)]
    region: Option<String>,

    /// Match type filter passed to the match list endpoint
    #[arg(long, default_value = "tourney")]
    match_type: String,

    /// Where to write the HTML page
    #[arg(short, long, default_value = "quick_match.html")]
    output: PathBuf,

    /// Skip probing community icons, use Data Dragon portraits
    #[arg(long)]
    no_probe: bool,

    /// Ignore cached icon URLs
    #[arg(long)]
    refresh: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let range = DateRange::new(args.from, args.to)?;
    let (start_time, end_time) = range.to_epoch_bounds();
    let query = MatchIdQuery {
        match_type: args.match_type,
        start_time,
        end_time,
        ..MatchIdQuery::new(args.count as usize)
    };

    let player_key = format!("{}#{}", args.game_name, args.tag_line);
    display_info(&format!(
        "Fetching {} {} games for {} via {} ({})",
        query.count,
        query.match_type,
        player_key,
        config.regional_routing(),
        range.describe()
    ));

    let client = RiotApiClient::new(config);

    // Step 1: Static data
    display_info("Step 1: Loading static champion data...");
    let version = client.get_latest_version()?;
    let champions = client.get_champions(&version)?;
    display_success(&format!("Patch {} ({} champions)", version, champions.len()));

    // Step 2: Account
    display_info("Step 2: Getting account info...");
    let account = client.get_account(&args.game_name, &args.tag_line)?;
    let short_puuid = account.puuid.get(..8).unwrap_or(&account.puuid);
    display_success(&format!("Found PUUID: {}", short_puuid));

    // Step 3: Match ids
    display_info("Step 3: Fetching match IDs...");
    let match_ids = report::fetch_match_ids(&client, &account.puuid, &query)?;
    if match_ids.is_empty() {
        display_warning("No matches found for this player and filter");
    } else {
        display_success(&format!("Found {} matches", match_ids.len()));
    }

    // Step 4: Match details
    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Fetching match details");
    let report = report::build_report(&client, account, &match_ids, &champions, |card| {
        if let Err(e) = &card.outcome {
            pb.suspend(|| display_warning(&format!("{}: {}", card.match_id, e)));
        }
        pb.inc(1);
    });
    pb.finish_with_message("✓ Match data fetched");

    // Step 5: Render
    display_info("Step 5: Resolving champion icons and rendering...");
    let mut store = if args.refresh {
        IconCache::default()
    } else {
        IconCache::load().unwrap_or_else(|e| {
            display_warning(&format!("Ignoring icon cache: {}", e));
            IconCache::default()
        })
    };
    store.prune_stale();

    let mut icons = IconResolver::new(&version, !args.no_probe, Some(store));
    let html = render_page(&report, &mut icons);
    fs::write(&args.output, html)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(store) = icons.into_store() {
        if let Err(e) = store.save() {
            display_warning(&format!("Could not save icon cache: {}", e));
        }
    }

    display_match_history(&report);
    if report.failures() > 0 {
        display_warning(&format!("{} matches could not be loaded", report.failures()));
    }
    display_success(&format!("Wrote {}", args.output.display()));

    Ok(())
}
