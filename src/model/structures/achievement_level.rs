use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum AchievementLevel {
    Bronze = 1,
    Silver = 2,
    Gold = 3
}

impl TryFrom<i32> for AchievementLevel {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(AchievementLevel::Bronze),
            2 => Ok(AchievementLevel::Silver),
            3 => Ok(AchievementLevel::Gold),
            _ => Err(())
        }
    }
}
