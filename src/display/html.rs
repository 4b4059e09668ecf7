use crate::analysis::ratios::TeamRatios;
use crate::analysis::summary::{PlayerSlot, Side, TeamSheet};
use crate::api::models::ChampionRef;
use crate::error::AppError;
use crate::report::{AnalyzedMatch, MatchCard, Report};

use super::icons::IconResolver;

const STYLE: &str = include_str!("style.css");

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Ban indices grouped for display. Blue reads left to right, 3 then the
/// rest; red is the mirror image so both teams' first bans sit on the outside.
pub fn ban_layout(len: usize, side: Side) -> Vec<Vec<usize>> {
    let split = len.min(3);
    let groups = vec![(0..split).collect::<Vec<_>>(), (split..len).collect()];
    let groups: Vec<Vec<usize>> = match side {
        Side::Blue => groups,
        Side::Red => groups
            .into_iter()
            .rev()
            .map(|g| g.into_iter().rev().collect())
            .collect(),
    };
    groups.into_iter().filter(|g| !g.is_empty()).collect()
}

pub fn render_page(report: &Report, icons: &mut IconResolver) -> String {
    let title = format!("{}#{}", report.account.game_name, report.account.tag_line);
    let wins = report.analyzed().filter(|m| m.summary.win).count();
    let played = report.analyzed().count();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Quick Match · {}</title>\n", escape(&title)));
    html.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));
    html.push_str("<h1 class=\"title\">Quick Match</h1>\n");
    html.push_str(&format!(
        "<p class=\"subtitle\">{} · {} games · {}W / {}L</p>\n",
        escape(&title),
        report.cards.len(),
        wins,
        played - wins
    ));

    for card in &report.cards {
        html.push_str(&render_card(card, icons));
        html.push_str("<div class=\"game-separator\"></div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_card(card: &MatchCard, icons: &mut IconResolver) -> String {
    match &card.outcome {
        Ok(analyzed) => render_match(analyzed, icons),
        Err(e) => render_error(&card.match_id, e),
    }
}

fn render_match(analyzed: &AnalyzedMatch, icons: &mut IconResolver) -> String {
    let summary = &analyzed.summary;
    let (result_class, result_label) = if summary.win {
        ("win", "Victory")
    } else {
        ("loss", "Defeat")
    };
    let date = summary
        .created_at
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default();

    let mut html = String::new();
    html.push_str("<div class=\"game-block\">\n");
    html.push_str(&format!(
        "<div class=\"game-header {}\">{} ({} side) · {} · {} · {}</div>\n",
        result_class,
        result_label,
        summary.player_side.label(),
        escape(&date),
        format_duration(summary.duration_secs),
        escape(&summary.match_id)
    ));
    html.push_str("<div class=\"columns\">\n");
    for side in [Side::Blue, Side::Red] {
        html.push_str(&render_team(summary.team(side), analyzed.ratios.team(side), icons));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_team(team: &TeamSheet, ratios: &TeamRatios, icons: &mut IconResolver) -> String {
    let mut html = format!("<div class=\"column {}\">\n", team.side.label());
    for (i, player) in team.players.iter().enumerate() {
        let gold = ratios.gold.get(i).copied().unwrap_or_default();
        let damage = ratios.damage.get(i).copied().unwrap_or_default();
        html.push_str(&player_row(player, team.side, gold, damage, icons));
    }
    html.push_str(&bans_row(&team.bans, team.side, icons));
    html.push_str("</div>\n");
    html
}

fn name_class(player: &PlayerSlot, side: Side) -> &'static str {
    if player.is_searched {
        return "name-green";
    }
    match side {
        Side::Blue => "name-blue",
        Side::Red => "name-red",
    }
}

fn player_row(player: &PlayerSlot, side: Side, gold: f64, damage: f64, icons: &mut IconResolver) -> String {
    let icon = format!(
        "<img class=\"icon{}\" src=\"{}\" alt=\"{}\">",
        if side == Side::Red { " right" } else { "" },
        escape(&icons.icon_url(&player.champion.id)),
        escape(&player.champion.name)
    );
    let text = format!(
        "<div class=\"player-text\">\n<div class=\"{}\">{}</div>\n<div class=\"subtext\">{}</div>\n<div class=\"ratios\">{:.1}% gold · {:.1}% dmg</div>\n</div>",
        name_class(player, side),
        escape(&player.name),
        escape(&player.champion.name),
        gold,
        damage
    );

    match side {
        Side::Blue => format!("<div class=\"player-row\">\n{}\n{}\n</div>\n", icon, text),
        Side::Red => format!("<div class=\"player-row right\">\n{}\n{}\n</div>\n", text, icon),
    }
}

fn ban_circle(ban: Option<&ChampionRef>, icons: &mut IconResolver) -> String {
    match ban {
        Some(champion) => format!(
            "<div class=\"ban-circle\"><img src=\"{}\" alt=\"{}\" title=\"{}\"></div>",
            escape(&icons.icon_url(&champion.id)),
            escape(&champion.name),
            escape(&champion.name)
        ),
        None => "<div class=\"ban-circle empty\"></div>".to_string(),
    }
}

fn bans_row(bans: &[Option<ChampionRef>], side: Side, icons: &mut IconResolver) -> String {
    let groups = ban_layout(bans.len(), side);
    let group_count = groups.len();

    let row_class = match side {
        Side::Blue => "bans-row",
        Side::Red => "bans-row right",
    };
    let mut html = format!("<div class=\"{}\">\n", row_class);
    for (g, indices) in groups.into_iter().enumerate() {
        // The 3-ban group sits on the outside edge; the other is split off.
        let split = match side {
            Side::Blue => g > 0,
            Side::Red => group_count > 1 && g == 0,
        };
        html.push_str(if split {
            "<div class=\"ban-group split\">"
        } else {
            "<div class=\"ban-group\">"
        });
        for i in indices {
            html.push_str(&ban_circle(bans[i].as_ref(), icons));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn render_error(match_id: &str, err: &AppError) -> String {
    format!(
        "<div class=\"game-block error\">\n<div class=\"game-header error\">{}</div>\n<div class=\"error-text\">Could not load this match: {}</div>\n</div>\n",
        escape(match_id),
        escape(&err.to_string())
    )
}
