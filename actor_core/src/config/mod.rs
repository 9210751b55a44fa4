//! Tunable constants configuration

mod constants;

pub use constants::{
    AttributeConstants, GameConstants, LevelConstants, PoolConstants, ReloadConstants,
    SkillConstants, StatusConstants,
};
