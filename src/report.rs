//! Plain-text scoreboard rendering for the non-interactive commands.

use crate::api::MatchRecord;

/// Shown when the backend has no records.
pub const EMPTY_SCOREBOARD: &str = "No players had played yet";

/// Renders every match as an aligned text table.
pub fn scoreboard_table(records: &[MatchRecord]) -> String {
    if records.is_empty() {
        return EMPTY_SCOREBOARD.to_string();
    }

    let name_width = records
        .iter()
        .flat_map(|r| [r.player1.name.chars().count(), r.player2.name.chars().count()])
        .max()
        .unwrap_or(0)
        .max("Players".len());

    let mut out = format!(
        "{:<name_width$}  {:<16}  {:>6}  {:>4}  {}\n",
        "Players", "Score", "Rounds", "Draw", "Id"
    );
    for record in records {
        out.push_str(&format!(
            "{:<name_width$}  {:<16}  {:>6}  {:>4}  {}\n",
            record.player1.name,
            score_cell(record.player1.score.win, record.player1.score.lose),
            record.rounds,
            record.draw,
            record.id,
        ));
        out.push_str(&format!(
            "{:<name_width$}  {:<16}\n",
            record.player2.name,
            score_cell(record.player2.score.win, record.player2.score.lose),
        ));
    }
    out
}

/// Renders one match in detail.
pub fn match_summary(record: &MatchRecord) -> String {
    format!(
        "Match {}\nRound: {}\n{} (X)  Win: {}  Lose: {}\n{} (O)  Win: {}  Lose: {}\nDraw: {}",
        record.id,
        record.display_round(),
        record.player1.name,
        record.player1.score.win,
        record.player1.score.lose,
        record.player2.name,
        record.player2.score.win,
        record.player2.score.lose,
        record.draw,
    )
}

fn score_cell(win: u32, lose: u32) -> String {
    format!("Win: {} Lose: {}", win, lose)
}
