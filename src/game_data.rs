use lazy_static::lazy_static;

use crate::models::{GameRecord, PlayerStats, RosterEntry, TeamRecord};

lazy_static! {
    static ref GAME_RECORD: GameRecord = build_game_record();
}

/// The fixed game record. Immutable, so sharing one instance across calls
/// is indistinguishable from rebuilding it per query.
pub fn game_record() -> &'static GameRecord {
    &GAME_RECORD
}

fn entry(name: &str, stats: PlayerStats) -> RosterEntry {
    RosterEntry { name: name.to_string(), stats }
}

fn build_game_record() -> GameRecord {
    GameRecord {
        home: TeamRecord {
            team_name: "Brooklyn Nets".to_string(),
            colors: vec!["Black".to_string(), "White".to_string()],
            players: vec![
                entry("Alan Anderson", PlayerStats { number: 0, shoe: 16, points: 22, rebounds: 12, assists: 12, steals: 3, blocks: 1, slam_dunks: 1 }),
                entry("Reggie Evens", PlayerStats { number: 30, shoe: 14, points: 12, rebounds: 12, assists: 12, steals: 12, blocks: 12, slam_dunks: 7 }),
                entry("Brook Lopez", PlayerStats { number: 11, shoe: 17, points: 17, rebounds: 19, assists: 10, steals: 3, blocks: 1, slam_dunks: 15 }),
                entry("Mason Plumlee", PlayerStats { number: 1, shoe: 19, points: 26, rebounds: 12, assists: 6, steals: 3, blocks: 8, slam_dunks: 5 }),
                entry("Jason Terry", PlayerStats { number: 31, shoe: 15, points: 19, rebounds: 2, assists: 2, steals: 4, blocks: 11, slam_dunks: 1 }),
            ],
        },
        away: TeamRecord {
            team_name: "Charlotte Hornets".to_string(),
            colors: vec!["Turquoise".to_string(), "Purple".to_string()],
            players: vec![
                entry("Jeff Adrien", PlayerStats { number: 4, shoe: 18, points: 10, rebounds: 1, assists: 1, steals: 2, blocks: 7, slam_dunks: 2 }),
                entry("Bismack Biyombo", PlayerStats { number: 0, shoe: 16, points: 12, rebounds: 4, assists: 7, steals: 7, blocks: 15, slam_dunks: 10 }),
                entry("DeSagna Diop", PlayerStats { number: 2, shoe: 14, points: 24, rebounds: 12, assists: 12, steals: 4, blocks: 5, slam_dunks: 5 }),
                entry("Ben Gordon", PlayerStats { number: 8, shoe: 15, points: 33, rebounds: 3, assists: 2, steals: 1, blocks: 1, slam_dunks: 0 }),
                entry("Brendan Hayword", PlayerStats { number: 33, shoe: 15, points: 6, rebounds: 12, assists: 12, steals: 22, blocks: 5, slam_dunks: 12 }),
            ],
        },
    }
}
