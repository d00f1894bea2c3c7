//! Mob templates
//!
//! Data-driven combatant definitions, loaded from a RON file with a
//! fallback to hardcoded defaults.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::entities::Mob;

/// Where combatant definitions live on disk.
const TEMPLATE_PATH: &str = "assets/data/mobs.ron";

/// A combatant definition loadable from external data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    /// Optional description/lore
    pub description: Option<String>,
}

impl MobTemplate {
    /// Build a live mob from this template. Goes through the counted
    /// constructor like every other mob.
    pub fn spawn(&self) -> Mob {
        Mob::new(self.name.clone(), self.hp, self.atk, self.def)
    }
}

/// Collection of mob templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobTemplates {
    pub templates: Vec<MobTemplate>,
}

impl MobTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&MobTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Load templates from `assets/data/mobs.ron`, falling back to the
    /// hardcoded defaults when the file is missing or broken.
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(TEMPLATE_PATH))
    }

    fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(templates) => return templates,
                    Err(e) => warn!("failed to parse {}: {}", path.display(), e),
                },
                Err(e) => warn!("failed to read {}: {}", path.display(), e),
            }
        }
        default_mob_templates()
    }
}

/// Hardcoded fallback templates.
pub fn default_mob_templates() -> MobTemplates {
    MobTemplates {
        templates: vec![
            MobTemplate {
                id: "hero".to_string(),
                name: "Me".to_string(),
                hp: 15,
                atk: 2,
                def: 10,
                description: Some("The one holding the keyboard.".to_string()),
            },
            MobTemplate {
                id: "bob".to_string(),
                name: "bob".to_string(),
                hp: 10,
                atk: 10,
                def: 10,
                description: Some("Hits much harder than he looks.".to_string()),
            },
        ],
    }
}
