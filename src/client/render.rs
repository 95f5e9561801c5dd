use crate::models::games::OwnedGames;
use crate::models::player::PlayerProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamesView {
    Top(usize),
    All,
}

pub fn render_profile(profile: &PlayerProfile) -> String {
    let mut out = String::from("\nPlayer Summary:\n----------------\n");
    for (label, value) in profile.entries() {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

/// Ranked game list with hours to one decimal, followed by the owned-games total.
///
/// The footer always reports `game_count` as Steam sent it, not the number of
/// rows printed.
pub fn render_games(owner: &str, games: &OwnedGames, view: GamesView) -> String {
    let (heading, rule, limit) = match view {
        GamesView::Top(n) => (format!("{}'s Top {} Most Played Games:", owner, n), "----------------", Some(n)),
        GamesView::All => (format!("{}'s Owned Games:", owner), "----------------------", None),
    };

    let mut out = format!("\n{}\n{}\n", heading, rule);
    for (rank, game) in games.most_played(limit).iter().enumerate() {
        out.push_str(&format!("[#{}] {}: {:.1} hrs\n", rank + 1, game.name, game.hours_played()));
    }
    out.push_str(rule);
    out.push('\n');
    out.push_str(&format!("{} owns {} games total (excluding F2P).\n", owner, games.game_count));
    out
}
