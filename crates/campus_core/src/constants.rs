/// Edge weight type (walking distance in meters)
pub type Weight = u32;
/// Distance reported for a target that cannot be reached from the source
pub const UNREACHABLE: Weight = Weight::MAX;
