use indexmap::IndexMap;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    database::db_structs::{Champion, GameDefinition, PlayerAchievement},
    model::structures::achievement_level::AchievementLevel
};

/// Unlocked achievement count for every level, Bronze first. Levels without achievements count 0.
pub fn achievements_per_level(achievements: &[PlayerAchievement]) -> IndexMap<AchievementLevel, i32> {
    AchievementLevel::iter()
        .map(|level| {
            let count = achievements.iter().filter(|a| a.achievement_level == level).count() as i32;
            (level, count)
        })
        .collect()
}

/// Most recently unlocked first
pub fn recent_achievements(achievements: &[PlayerAchievement]) -> Vec<PlayerAchievement> {
    achievements
        .iter()
        .sorted_by(|a, b| {
            b.date_created
                .cmp(&a.date_created)
                .then(a.achievement_id.cmp(&b.achievement_id))
        })
        .cloned()
        .collect()
}

/// Champion records that still hold the championship of their game definition.
pub fn championed_games(champions: &[Champion], definitions: &[GameDefinition]) -> Vec<Champion> {
    champions
        .iter()
        .filter(|champion| {
            definitions
                .iter()
                .any(|d| d.id == champion.game_definition_id && d.champion_id == Some(champion.id))
        })
        .cloned()
        .collect()
}

/// The game definition of every champion record the player has held, current
/// championships included. A game won back after losing it appears once per record.
pub fn former_championed_games(champions: &[Champion], definitions: &[GameDefinition]) -> Vec<GameDefinition> {
    champions
        .iter()
        .filter_map(|champion| definitions.iter().find(|d| d.id == champion.game_definition_id))
        .cloned()
        .collect()
}
