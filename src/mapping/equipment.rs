use crate::types::Equipment;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Maps Free Exercise DB equipment strings to the app's equipment values.
static EQUIPMENT_KINDS: Lazy<HashMap<&'static str, Equipment>> = Lazy::new(|| {
    HashMap::from([
        ("barbell", Equipment::Barbell),
        ("e-z curl bar", Equipment::Barbell),
        ("ez curl bar", Equipment::Barbell),
        ("ez-curl bar", Equipment::Barbell),
        ("dumbbell", Equipment::Dumbbell),
        ("dumbbells", Equipment::Dumbbell),
        ("cable", Equipment::Cable),
        ("machine", Equipment::Machine),
        ("body only", Equipment::Bodyweight),
        ("body weight", Equipment::Bodyweight),
        ("bodyweight", Equipment::Bodyweight),
        ("kettlebell", Equipment::Kettlebell),
        ("kettlebells", Equipment::Kettlebell),
        ("bands", Equipment::Bands),
        ("band", Equipment::Bands),
        ("resistance band", Equipment::Bands),
        ("foam roll", Equipment::Other),
        ("medicine ball", Equipment::Other),
        ("exercise ball", Equipment::Other),
        ("other", Equipment::Other),
    ])
});

/// Normalizes a raw equipment string. Always succeeds; anything absent,
/// empty, or unrecognized becomes `Other`.
pub fn normalize(raw: Option<&str>) -> Equipment {
    EQUIPMENT_KINDS
        .get(raw.unwrap_or_default().trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(Equipment::Other)
}
