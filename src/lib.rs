pub mod game_data;
pub mod game_query_service;
pub mod models;

pub use game_data::game_record;
pub use game_query_service::GameQueryService;
pub use models::{GameRecord, PlayerStats, RosterEntry, TeamRecord};
