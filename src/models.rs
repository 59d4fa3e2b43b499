use serde::{Deserialize, Serialize};

pub type PlayerName = String;
pub type TeamName = String;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub number: i32,
    pub shoe: i32,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub slam_dunks: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub name: PlayerName,
    pub stats: PlayerStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub team_name: TeamName,
    pub colors: Vec<String>,
    pub players: Vec<RosterEntry>,
}

impl TeamRecord {
    pub fn get_player(&self, name: &str) -> Option<&RosterEntry> {
        self.players.iter().find(|e| e.name == name)
    }

    pub fn total_points(&self) -> i32 {
        self.players.iter().map(|e| e.stats.points).sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub home: TeamRecord,
    pub away: TeamRecord,
}

impl GameRecord {
    // home roster shadows away on duplicated names
    pub fn get_player(&self, name: &str) -> Option<&RosterEntry> {
        self.home.get_player(name).or_else(|| self.away.get_player(name))
    }

    pub fn get_team(&self, team_name: &str) -> Option<&TeamRecord> {
        [&self.home, &self.away]
            .into_iter()
            .find(|e| e.team_name == team_name)
    }

    pub fn all_players(&self) -> impl Iterator<Item = &RosterEntry> {
        self.home.players.iter().chain(self.away.players.iter())
    }
}
