use crate::battle::state::TurnRng;
use crate::errors::{RosterError, RosterResult};
use schema::CombatantTemplate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_ROSTER: &str = include_str!("../data/roster.ron");

/// The fixed, ordered catalogue of combatant templates a battle draws from.
///
/// Every template is validated on the way in, and ids are unique, so the
/// restart resampling loop always terminates once two or more entries exist.
#[derive(Debug, Clone)]
pub struct Roster {
    templates: Vec<CombatantTemplate>,
}

impl Roster {
    pub fn new(templates: Vec<CombatantTemplate>) -> RosterResult<Self> {
        if templates.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen_ids = HashSet::new();
        for template in &templates {
            validate_template(template)?;
            if !seen_ids.insert(template.id) {
                return Err(RosterError::DuplicateId(template.id));
            }
        }

        Ok(Self { templates })
    }

    /// The four-entry roster shipped with the crate
    pub fn builtin() -> RosterResult<Self> {
        Self::from_ron_str(BUILTIN_ROSTER)
    }

    /// Parse a roster from RON text
    pub fn from_ron_str(content: &str) -> RosterResult<Self> {
        let templates: Vec<CombatantTemplate> =
            ron::from_str(content).map_err(|e| RosterError::Parse(e.to_string()))?;
        Self::new(templates)
    }

    /// Load a roster from a RON file
    pub fn load(path: &Path) -> RosterResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RosterError::Io(format!("{}: {}", path.display(), e)))?;
        let roster = Self::from_ron_str(&content)?;
        debug!(path = %path.display(), entries = roster.len(), "Loaded roster");
        Ok(roster)
    }

    pub fn templates(&self) -> &[CombatantTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Entries 0 and 1, or entry 0 twice for a single-entry roster
    pub fn opening_pair(&self) -> (&CombatantTemplate, &CombatantTemplate) {
        let first = &self.templates[0];
        let second = self.templates.get(1).unwrap_or(first);
        (first, second)
    }

    /// Two uniformly drawn entries. With more than one entry the second pick
    /// is redrawn until its id differs from the first.
    pub fn sample_pair(&self, rng: &mut TurnRng) -> (&CombatantTemplate, &CombatantTemplate) {
        let first = &self.templates[rng.pick_index(self.len(), "roster pick")];
        let mut second = &self.templates[rng.pick_index(self.len(), "roster pick")];
        while self.len() > 1 && second.id == first.id {
            second = &self.templates[rng.pick_index(self.len(), "roster repick")];
        }
        (first, second)
    }
}

fn validate_template(template: &CombatantTemplate) -> RosterResult<()> {
    let invalid = |reason: String| RosterError::InvalidTemplate {
        name: template.name.clone(),
        reason,
    };

    if !(1..=2).contains(&template.types.len()) {
        return Err(invalid(format!(
            "expected 1-2 types, found {}",
            template.types.len()
        )));
    }
    if !(1..=4).contains(&template.moves.len()) {
        return Err(invalid(format!(
            "expected 1-4 moves, found {}",
            template.moves.len()
        )));
    }

    let stats = &template.base_stats;
    for (stat, value) in [
        ("max_hp", template.max_hp),
        ("attack", stats.attack),
        ("defense", stats.defense),
        ("speed", stats.speed),
    ] {
        if value == 0 {
            return Err(invalid(format!("{} must be positive", stat)));
        }
    }

    if let Some(move_data) = template.moves.iter().find(|m| m.accuracy > 100) {
        return Err(invalid(format!(
            "move '{}' has accuracy {} above 100",
            move_data.name, move_data.accuracy
        )));
    }

    Ok(())
}
