use crate::core::models::attributes::{
    AttributeProfile, DefenseAttributes, DrivingAttributes, ShootingAttributes, SkillAttributes,
};
use crate::core::models::position::Position;

const fn profile(
    [close, mid, long, free_throw]: [u8; 4],
    [layups, dunking]: [u8; 2],
    [speed, dribbling, passing, stamina]: [u8; 4],
    [rebounding, defense, blocking, stealing]: [u8; 4],
) -> AttributeProfile {
    AttributeProfile {
        shooting: ShootingAttributes {
            close,
            mid,
            long,
            free_throw,
        },
        driving: DrivingAttributes { layups, dunking },
        skills: SkillAttributes {
            speed,
            dribbling,
            passing,
            stamina,
        },
        defense: DefenseAttributes {
            rebounding,
            defense,
            blocking,
            stealing,
        },
    }
}

// shooting [close, mid, long, ft], driving [layups, dunking],
// skills [speed, dribbling, passing, stamina],
// defense [rebounding, defense, blocking, stealing]
static POSITION_DEFAULTS: [AttributeProfile; 5] = [
    profile([65, 70, 75, 80], [70, 50], [85, 80, 85, 75], [45, 65, 30, 70]),
    profile([70, 75, 80, 82], [75, 60], [80, 75, 65, 75], [50, 70, 35, 65]),
    profile([72, 70, 75, 78], [75, 65], [75, 70, 70, 80], [65, 72, 45, 60]),
    profile([75, 65, 60, 75], [80, 75], [65, 60, 55, 80], [80, 75, 65, 50]),
    profile([80, 55, 45, 70], [85, 80], [55, 50, 45, 75], [85, 80, 80, 45]),
];

/// Profile used for a player the stats source has nothing on.
pub fn position_default(position: Position) -> AttributeProfile {
    POSITION_DEFAULTS[position.index()]
}
