//! External game data

pub mod mobs;

pub use mobs::{default_mob_templates, MobTemplate, MobTemplates};
