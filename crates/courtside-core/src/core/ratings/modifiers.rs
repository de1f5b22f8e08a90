use crate::core::models::position::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Position-specific tuning constants for the attribute conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PositionModifiers {
    pub passing_multiplier: f64,
    pub min_passing: u8,
    pub base_speed: u8,
    pub min_speed: u8,
    pub base_dribbling: u8,
    pub min_dribbling: u8,
    pub rebound_multiplier: f64,
    pub layup_base: u8,
    pub dunk_base: u8,
}

const POINT_GUARD: PositionModifiers = PositionModifiers {
    passing_multiplier: 15.0,
    min_passing: 60,
    base_speed: 70,
    min_speed: 60,
    base_dribbling: 65,
    min_dribbling: 55,
    rebound_multiplier: 8.0,
    layup_base: 50,
    dunk_base: 30,
};

const SHOOTING_GUARD: PositionModifiers = PositionModifiers {
    passing_multiplier: 12.0,
    min_passing: 45,
    base_speed: 65,
    min_speed: 55,
    base_dribbling: 60,
    min_dribbling: 50,
    rebound_multiplier: 10.0,
    layup_base: 55,
    dunk_base: 40,
};

const SMALL_FORWARD: PositionModifiers = PositionModifiers {
    passing_multiplier: 10.0,
    min_passing: 50,
    base_speed: 60,
    min_speed: 50,
    base_dribbling: 55,
    min_dribbling: 45,
    rebound_multiplier: 12.0,
    layup_base: 60,
    dunk_base: 45,
};

const POWER_FORWARD: PositionModifiers = PositionModifiers {
    passing_multiplier: 8.0,
    min_passing: 40,
    base_speed: 50,
    min_speed: 40,
    base_dribbling: 45,
    min_dribbling: 35,
    rebound_multiplier: 15.0,
    layup_base: 65,
    dunk_base: 55,
};

const CENTER: PositionModifiers = PositionModifiers {
    passing_multiplier: 6.0,
    min_passing: 35,
    base_speed: 45,
    min_speed: 35,
    base_dribbling: 40,
    min_dribbling: 30,
    rebound_multiplier: 18.0,
    layup_base: 70,
    dunk_base: 60,
};

/// One [`PositionModifiers`] record per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierTable {
    entries: [PositionModifiers; 5],
}

impl Default for ModifierTable {
    fn default() -> Self {
        Self {
            entries: [
                POINT_GUARD,
                SHOOTING_GUARD,
                SMALL_FORWARD,
                POWER_FORWARD,
                CENTER,
            ],
        }
    }
}

/// On-disk form: any omitted slot keeps its built-in record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ModifierTableFile {
    point_guard: Option<PositionModifiers>,
    shooting_guard: Option<PositionModifiers>,
    small_forward: Option<PositionModifiers>,
    power_forward: Option<PositionModifiers>,
    center: Option<PositionModifiers>,
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid modifiers for {position}: {reason}")]
    Invalid { position: Position, reason: String },
}

impl ModifierTable {
    pub fn get(&self, position: Position) -> &PositionModifiers {
        &self.entries[position.index()]
    }

    pub fn with(mut self, position: Position, modifiers: PositionModifiers) -> Self {
        self.entries[position.index()] = modifiers;
        self
    }

    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            TableLoadError::Toml { source, .. } => TableLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TableLoadError> {
        let file: ModifierTableFile =
            toml::from_str(content).map_err(|e| TableLoadError::Toml {
                path: "<inline>".to_string(),
                source: e,
            })?;

        let overrides = [
            (Position::PointGuard, file.point_guard),
            (Position::ShootingGuard, file.shooting_guard),
            (Position::SmallForward, file.small_forward),
            (Position::PowerForward, file.power_forward),
            (Position::Center, file.center),
        ];

        let mut table = Self::default();
        for (position, modifiers) in overrides {
            if let Some(modifiers) = modifiers {
                validate(position, &modifiers)?;
                table = table.with(position, modifiers);
            }
        }
        Ok(table)
    }
}

fn validate(position: Position, modifiers: &PositionModifiers) -> Result<(), TableLoadError> {
    let invalid = |reason: String| TableLoadError::Invalid { position, reason };

    for (name, multiplier) in [
        ("passing-multiplier", modifiers.passing_multiplier),
        ("rebound-multiplier", modifiers.rebound_multiplier),
    ] {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(invalid(format!(
                "{name} must be a non-negative number, got {multiplier}"
            )));
        }
    }

    for (name, value) in [
        ("min-passing", modifiers.min_passing),
        ("base-speed", modifiers.base_speed),
        ("min-speed", modifiers.min_speed),
        ("base-dribbling", modifiers.base_dribbling),
        ("min-dribbling", modifiers.min_dribbling),
        ("layup-base", modifiers.layup_base),
        ("dunk-base", modifiers.dunk_base),
    ] {
        if value > 100 {
            return Err(invalid(format!("{name} must be at most 100, got {value}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn default_table_holds_point_guard_constants() {
        let table = ModifierTable::default();
        let pg = table.get(Position::PointGuard);
        assert_eq!(pg.passing_multiplier, 15.0);
        assert_eq!(pg.min_passing, 60);
        assert_eq!(pg.base_speed, 70);
        assert_eq!(pg.min_speed, 60);
        assert_eq!(pg.base_dribbling, 65);
        assert_eq!(pg.min_dribbling, 55);
        assert_eq!(pg.rebound_multiplier, 8.0);
        assert_eq!(pg.layup_base, 50);
        assert_eq!(pg.dunk_base, 30);
    }

    #[test]
    fn default_table_scales_rebounding_up_and_passing_down_toward_center() {
        let table = ModifierTable::default();
        let rebound: Vec<f64> = Position::ALL
            .iter()
            .map(|&p| table.get(p).rebound_multiplier)
            .collect();
        let passing: Vec<f64> = Position::ALL
            .iter()
            .map(|&p| table.get(p).passing_multiplier)
            .collect();
        assert_eq!(rebound, vec![8.0, 10.0, 12.0, 15.0, 18.0]);
        assert_eq!(passing, vec![15.0, 12.0, 10.0, 8.0, 6.0]);
    }

    #[test]
    fn load_overrides_only_listed_positions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modifiers.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            [center]
            passing-multiplier = 7.5
            min-passing = 30
            base-speed = 40
            min-speed = 30
            base-dribbling = 35
            min-dribbling = 25
            rebound-multiplier = 20.0
            layup-base = 72
            dunk-base = 65
            "#
        )
        .unwrap();

        let table = ModifierTable::load(&path).unwrap();
        assert_eq!(table.get(Position::Center).rebound_multiplier, 20.0);
        assert_eq!(table.get(Position::Center).dunk_base, 65);
        assert_eq!(
            table.get(Position::PointGuard),
            ModifierTable::default().get(Position::PointGuard)
        );
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = ModifierTable::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(TableLoadError::Io { .. })));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = ModifierTable::from_toml_str("[sixth-man]\nbase-speed = 10\n");
        assert!(matches!(result, Err(TableLoadError::Toml { .. })));
    }

    #[test]
    fn out_of_range_base_is_rejected() {
        let content = r#"
            [point-guard]
            passing-multiplier = 15.0
            min-passing = 60
            base-speed = 170
            min-speed = 60
            base-dribbling = 65
            min-dribbling = 55
            rebound-multiplier = 8.0
            layup-base = 50
            dunk-base = 30
        "#;
        let result = ModifierTable::from_toml_str(content);
        assert!(matches!(
            result,
            Err(TableLoadError::Invalid {
                position: Position::PointGuard,
                ..
            })
        ));
    }
}
