use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingAttributes {
    pub close: u8,
    pub mid: u8,
    pub long: u8,
    pub free_throw: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingAttributes {
    pub layups: u8,
    pub dunking: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAttributes {
    pub speed: u8,
    pub dribbling: u8,
    pub passing: u8,
    pub stamina: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseAttributes {
    pub rebounding: u8,
    pub defense: u8,
    pub blocking: u8,
    pub stealing: u8,
}

/// The bounded ability profile the game engine reads for a player.
///
/// Every value lies in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeProfile {
    pub shooting: ShootingAttributes,
    pub driving: DrivingAttributes,
    pub skills: SkillAttributes,
    pub defense: DefenseAttributes,
}

impl AttributeProfile {
    /// All fourteen sub-attributes, group by group.
    pub fn values(&self) -> [u8; 14] {
        let s = &self.shooting;
        let d = &self.driving;
        let k = &self.skills;
        let f = &self.defense;
        [
            s.close,
            s.mid,
            s.long,
            s.free_throw,
            d.layups,
            d.dunking,
            k.speed,
            k.dribbling,
            k.passing,
            k.stamina,
            f.rebounding,
            f.defense,
            f.blocking,
            f.stealing,
        ]
    }

    /// Mean of the four group means, truncated.
    pub fn overall(&self) -> u8 {
        let s = &self.shooting;
        let d = &self.driving;
        let k = &self.skills;
        let f = &self.defense;
        let shooting =
            (f64::from(s.close) + f64::from(s.mid) + f64::from(s.long) + f64::from(s.free_throw))
                / 4.0;
        let driving = (f64::from(d.layups) + f64::from(d.dunking)) / 2.0;
        let skills = (f64::from(k.speed)
            + f64::from(k.dribbling)
            + f64::from(k.passing)
            + f64::from(k.stamina))
            / 4.0;
        let defense = (f64::from(f.rebounding)
            + f64::from(f.defense)
            + f64::from(f.blocking)
            + f64::from(f.stealing))
            / 4.0;
        ((shooting + driving + skills + defense) / 4.0) as u8
    }
}
