//! Shipping coverage: regions and their communes.
//!
//! A fixed closed mapping; the selected commune must belong to the
//! selected region.

/// Regions the store ships to.
pub const REGIONS: [&str; 5] = [
    "Región Metropolitana de Santiago",
    "Región de Valparaíso",
    "Región del Biobío",
    "Región de La Araucanía",
    "Región de Los Lagos",
];

/// The communes served within `region`. Unknown region -> empty.
pub fn communes_for(region: &str) -> &'static [&'static str] {
    match region {
        "Región Metropolitana de Santiago" => &[
            "Santiago",
            "Maipú",
            "La Florida",
            "Puente Alto",
            "Las Condes",
            "Providencia",
            "Ñuñoa",
        ],
        "Región de Valparaíso" => &[
            "Valparaíso",
            "Viña del Mar",
            "Quilpué",
            "Villa Alemana",
            "Concón",
        ],
        "Región del Biobío" => &[
            "Concepción",
            "Talcahuano",
            "Los Ángeles",
            "Chillán",
            "Coronel",
        ],
        "Región de La Araucanía" => &["Temuco", "Villarrica", "Pucón", "Angol"],
        "Región de Los Lagos" => &["Puerto Montt", "Osorno", "Castro", "Ancud"],
        _ => &[],
    }
}

/// Check that `commune` belongs to `region`.
pub fn is_valid_commune(region: &str, commune: &str) -> bool {
    communes_for(region).contains(&commune)
}
