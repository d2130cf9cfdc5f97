/// Major status conditions. A combatant carries at most one at a time.
///
/// These are not tags: they outlive the tag registry (they persist through
/// switching) and are only ever requested by tags, e.g. drowsiness ending in
/// [`NonVolatileStatus::Sleep`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NonVolatileStatus {
    Poison,
    Toxic,
    Paralysis,
    Sleep,
    Freeze,
    Burn,
}
