use bevy::math::Vec3;

/// Coordinate threshold shared by every region rule.
pub const REGION_THRESHOLD: f32 = 0.5;

/// Colour a point blends toward as the cursor approaches it.
pub const HOVER_COLOUR: Vec3 = Vec3::ONE;

pub const SUPERIOR_COLOUR: Vec3 = Vec3::new(0.26, 0.56, 0.79);
pub const LATERAL_COLOUR: Vec3 = Vec3::new(0.56, 0.82, 0.95);
pub const ANTERIOR_COLOUR: Vec3 = Vec3::new(0.08, 0.27, 0.52);
pub const INTERIOR_COLOUR: Vec3 = Vec3::new(0.52, 0.77, 0.92);
pub const BOUNDARY_COLOUR: Vec3 = Vec3::new(10.0 / 255.0, 1.0 / 255.0, 240.0 / 255.0);

pub struct RegionInfo {
    pub id: u8,
    pub name: &'static str,
    pub colour: Vec3,
}

/// Point-cloud regions in rule priority order. Ids match the region index
/// used by the point-cloud shader.
pub const REGION_MAP: &[RegionInfo] = &[
    RegionInfo {
        id: 0,
        name: "superior (y > 0.5)",
        colour: SUPERIOR_COLOUR,
    },
    RegionInfo {
        id: 1,
        name: "lateral (x > 0.5)",
        colour: LATERAL_COLOUR,
    },
    RegionInfo {
        id: 2,
        name: "anterior (z > 0.5)",
        colour: ANTERIOR_COLOUR,
    },
    RegionInfo {
        id: 3,
        name: "interior",
        colour: INTERIOR_COLOUR,
    },
    RegionInfo {
        id: 4,
        name: "boundary",
        colour: BOUNDARY_COLOUR,
    },
];

pub fn get_region_name(id: u8) -> String {
    REGION_MAP
        .iter()
        .find(|r| r.id == id)
        .map_or("unknown", |r| r.name)
        .to_string()
}
