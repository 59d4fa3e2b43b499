use tracing::log;

use crate::game_data::game_record;
use crate::models::PlayerStats;

/// Stateless facade over the fixed game record. Lookups are exact-match and
/// case-sensitive; absence is a sentinel (`0`, empty vec, `None`), never an
/// error.
pub struct GameQueryService;

impl GameQueryService {
    pub fn num_points_scored(player_name: &str) -> i32 {
        GameQueryService::player_stats(player_name).map(|e| e.points).unwrap_or(0)
    }

    pub fn shoe_size(player_name: &str) -> i32 {
        GameQueryService::player_stats(player_name).map(|e| e.shoe).unwrap_or(0)
    }

    pub fn team_colors(team_name: &str) -> Vec<String> {
        game_record()
            .get_team(team_name)
            .map(|e| e.colors.clone())
            .unwrap_or_default()
    }

    pub fn team_names() -> Vec<String> {
        let game = game_record();
        vec![game.home.team_name.clone(), game.away.team_name.clone()]
    }

    pub fn player_numbers(team_name: &str) -> Vec<i32> {
        game_record()
            .get_team(team_name)
            .map(|e| e.players.iter().map(|p| p.stats.number).collect())
            .unwrap_or_default()
    }

    pub fn player_stats(player_name: &str) -> Option<PlayerStats> {
        let stats = game_record().get_player(player_name).map(|e| e.stats);
        if stats.is_none() {
            log::debug!("[QUERY] No player named {player_name}");
        }
        stats
    }

    /// Stat record as a JSON object string, `{}` for unknown players.
    pub fn player_stats_raw(player_name: &str) -> String {
        GameQueryService::player_stats(player_name)
            .and_then(|e| serde_json::to_string(&e).ok())
            .unwrap_or_else(|| "{}".to_string())
    }

    pub fn big_shoe_rebounds() -> i32 {
        game_record()
            .all_players()
            .reduce(|best, e| match e.stats.shoe > best.stats.shoe {
                true => e,
                false => best,
            })
            .map(|e| e.stats.rebounds)
            .unwrap_or(0)
    }

    pub fn most_points_scored() -> String {
        let mut max_points = 0;
        let mut top_scorer = String::new();
        for e in game_record().all_players() {
            if e.stats.points > max_points {
                max_points = e.stats.points;
                top_scorer = e.name.clone();
            }
        }
        top_scorer
    }

    pub fn winning_team() -> String {
        let game = game_record();
        match game.home.total_points() > game.away.total_points() {
            true => game.home.team_name.clone(),
            false => game.away.team_name.clone(),
        }
    }

    // On equal lengths the later name wins: the accumulator survives only
    // while strictly longer.
    pub fn player_with_longest_name() -> String {
        game_record()
            .all_players()
            .map(|e| e.name.as_str())
            .reduce(|a, b| match a.len() > b.len() { true => a, false => b })
            .unwrap_or_default()
            .to_string()
    }

    pub fn does_long_name_steal_a_ton() -> bool {
        let game = game_record();
        let long_name = GameQueryService::player_with_longest_name();
        let max_steals = game.all_players().map(|e| e.stats.steals).max().unwrap_or(0);
        let player_steals = game.get_player(&long_name).map(|e| e.stats.steals).unwrap_or(0);
        player_steals == max_steals
    }
}

#[cfg(test)]
mod tests {
    use crate::game_query_service::GameQueryService;

    #[test]
    fn points_and_shoe_for_known_players() {
        assert_eq!(GameQueryService::num_points_scored("Ben Gordon"), 33);
        assert_eq!(GameQueryService::num_points_scored("Alan Anderson"), 22);
        assert_eq!(GameQueryService::shoe_size("Mason Plumlee"), 19);
    }

    #[test]
    fn unknown_player_yields_zero_and_none() {
        assert_eq!(GameQueryService::num_points_scored("Nobody Atall"), 0);
        assert_eq!(GameQueryService::shoe_size("Nobody Atall"), 0);
        assert!(GameQueryService::player_stats("Nobody Atall").is_none());
        assert_eq!(GameQueryService::player_stats_raw("Nobody Atall"), "{}");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert_eq!(GameQueryService::num_points_scored("ben gordon"), 0);
        assert_eq!(GameQueryService::team_colors("brooklyn nets"), Vec::<String>::new());
    }

    #[test]
    fn team_names_home_first() {
        assert_eq!(
            GameQueryService::team_names(),
            vec!["Brooklyn Nets".to_string(), "Charlotte Hornets".to_string()]
        );
    }

    #[test]
    fn team_colors_known_and_unknown() {
        assert_eq!(
            GameQueryService::team_colors("Brooklyn Nets"),
            vec!["Black".to_string(), "White".to_string()]
        );
        assert_eq!(
            GameQueryService::team_colors("Charlotte Hornets"),
            vec!["Turquoise".to_string(), "Purple".to_string()]
        );
        assert_eq!(GameQueryService::team_colors("Unknown Team"), Vec::<String>::new());
    }

    #[test]
    fn player_numbers_in_roster_order() {
        assert_eq!(GameQueryService::player_numbers("Charlotte Hornets"), vec![4, 0, 2, 8, 33]);
        assert_eq!(GameQueryService::player_numbers("Brooklyn Nets"), vec![0, 30, 11, 1, 31]);
        assert_eq!(GameQueryService::player_numbers("Unknown Team"), Vec::<i32>::new());
    }

    #[test]
    fn player_stats_full_record() {
        let stats = GameQueryService::player_stats("Brendan Hayword").unwrap();
        assert_eq!(stats.number, 33);
        assert_eq!(stats.shoe, 15);
        assert_eq!(stats.points, 6);
        assert_eq!(stats.rebounds, 12);
        assert_eq!(stats.assists, 12);
        assert_eq!(stats.steals, 22);
        assert_eq!(stats.blocks, 5);
        assert_eq!(stats.slam_dunks, 12);
    }

    #[test]
    fn player_stats_raw_is_json_object() {
        let raw = GameQueryService::player_stats_raw("Ben Gordon");
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["points"], 33);
        assert_eq!(parsed["slam_dunks"], 0);
    }

    #[test]
    fn big_shoe_rebounds_picks_biggest_shoe() {
        // Mason Plumlee, shoe 19, has 12 rebounds
        assert_eq!(GameQueryService::big_shoe_rebounds(), 12);
    }

    #[test]
    fn most_points_scored_is_league_max() {
        assert_eq!(GameQueryService::most_points_scored(), "Ben Gordon");
    }

    #[test]
    fn winning_team_has_higher_points_sum() {
        // home 96, away 85
        assert_eq!(GameQueryService::winning_team(), "Brooklyn Nets");
    }

    #[test]
    fn longest_name_later_entry_wins_tie() {
        // Bismack Biyombo and Brendan Hayword are both 15 chars
        assert_eq!(GameQueryService::player_with_longest_name(), "Brendan Hayword");
    }

    #[test]
    fn long_name_steals_a_ton() {
        // Brendan Hayword's 22 steals is the league max
        assert!(GameQueryService::does_long_name_steal_a_ton());
    }

    #[test]
    fn queries_are_idempotent() {
        assert_eq!(GameQueryService::winning_team(), GameQueryService::winning_team());
        assert_eq!(GameQueryService::big_shoe_rebounds(), GameQueryService::big_shoe_rebounds());
        assert_eq!(
            GameQueryService::player_stats("Jason Terry"),
            GameQueryService::player_stats("Jason Terry")
        );
    }
}
