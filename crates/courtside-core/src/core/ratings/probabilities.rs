use crate::core::models::attributes::AttributeProfile;
use crate::core::models::player::DerivedProbabilities;

const BLOCK_CHANCE_SCALE: f64 = 750.0;

pub fn derive(profile: &AttributeProfile) -> DerivedProbabilities {
    let speed = f64::from(profile.skills.speed);
    let dribbling = f64::from(profile.skills.dribbling);
    let passing = f64::from(profile.skills.passing);
    let defense = f64::from(profile.defense.defense);
    let stealing = f64::from(profile.defense.stealing);
    let blocking = f64::from(profile.defense.blocking);

    DerivedProbabilities {
        complete_pass: passing / 100.0,
        protect_drive: (0.60 * dribbling + 0.40 * speed) / 100.0,
        steal_drive: (0.40 * defense + 0.30 * speed + 0.30 * stealing) / 100.0,
        steal_pass: (0.25 * defense + 0.35 * speed + 0.40 * stealing) / 100.0,
        // Peaks at 0.16 for a 100/100 shot blocker.
        block_chance: (0.80 * blocking + 0.40 * defense) / BLOCK_CHANCE_SCALE,
    }
}
