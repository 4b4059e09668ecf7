use crate::report::Report;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "match")]
    match_id: String,
    side: String,
    result: String,
    champion: String,
    gold: String,
    damage: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Win rate in percent over `played` games; 0 when nothing was played.
pub fn win_rate(wins: usize, played: usize) -> f64 {
    if played == 0 {
        0.0
    } else {
        wins as f64 / played as f64 * 100.0
    }
}

pub fn display_match_history(report: &Report) {
    let played = report.analyzed().count();
    let wins = report.analyzed().filter(|m| m.summary.win).count();

    println!(
        "\n{}",
        format!(
            "📊 MATCH HISTORY {}#{} (Last {} Games)",
            report.account.game_name,
            report.account.tag_line,
            report.cards.len()
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        (played - wins).to_string().red(),
        win_rate(wins, played)
    );

    let mut rows = vec![];
    for (idx, card) in report.cards.iter().enumerate() {
        let number = format!("{}", idx + 1);
        let row = match &card.outcome {
            Ok(analyzed) => {
                let summary = &analyzed.summary;
                let side = summary.player_side;
                let team = summary.team(side);
                let ratios = analyzed.ratios.team(side);
                let slot = team.players.iter().position(|p| p.is_searched);

                MatchRow {
                    number,
                    match_id: card.match_id.clone(),
                    side: side.label().to_string(),
                    result: if summary.win {
                        "WIN".green().to_string()
                    } else {
                        "LOSS".red().to_string()
                    },
                    champion: slot
                        .map(|i| team.players[i].champion.name.clone())
                        .unwrap_or_default(),
                    gold: slot
                        .map(|i| format!("{:.1}%", ratios.gold[i]))
                        .unwrap_or_default(),
                    damage: slot
                        .map(|i| format!("{:.1}%", ratios.damage[i]))
                        .unwrap_or_default(),
                }
            }
            Err(e) => MatchRow {
                number,
                match_id: card.match_id.clone(),
                side: "-".to_string(),
                result: "ERROR".yellow().to_string(),
                champion: e.to_string(),
                gold: String::new(),
                damage: String::new(),
            },
        };
        rows.push(row);
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
