//! Guidance shown before a planting date exists

use crate::models::Crop;

const MAIZ_ADVICE: &[&str] = &[
    "Elige semillas certificadas y variedades resistentes.",
    "Prepara el terreno removiendo malezas.",
    "Realiza análisis de suelo antes de sembrar.",
    "Aporta abono de base según el análisis.",
    "Siembra a 2-5 cm de profundidad y 70 cm entre hileras.",
    "Si esperas lluvia intensa, espera para evitar encharcamientos.",
    "Evita sembrar con temperaturas menores a 12 °C.",
];

const PAPA_ADVICE: &[&str] = &[
    "Selecciona tubérculos sanos y desinfectados.",
    "Prepara surcos de 30 cm de profundidad.",
    "Analiza el suelo y ajusta pH si es necesario.",
    "Evita suelos encharcados y compactados.",
    "Siembra cuando la temperatura sea >10°C.",
    "Evita siembras muy profundas o superficiales.",
];

const FRIJOL_ADVICE: &[&str] = &[
    "Escoge semillas tratadas contra hongos.",
    "Remueve malezas y rastrilla la tierra.",
    "No siembres en suelos muy fríos o húmedos.",
    "Siembra a 3-5 cm de profundidad y 50 cm entre hileras.",
    "Evita sembrar justo antes de lluvias intensas.",
];

const TRIGO_ADVICE: &[&str] = &[
    "Usa semilla certificada libre de patógenos.",
    "Prepara el suelo con arado y rastra.",
    "Realiza análisis y corrige deficiencias nutricionales.",
    "Siembra a 2-4 cm de profundidad y 20 cm entre hileras.",
    "Si se pronostican lluvias fuertes, retrasa la siembra.",
];

/// Returned for crops without specific guidance
pub const GENERIC_ADVICE: &[&str] = &[
    "Asegúrate de preparar bien el suelo y elegir semillas de calidad.",
    "Consulta recomendaciones específicas para tu cultivo.",
];

pub fn advice_for(crop: Crop) -> &'static [&'static str] {
    match crop {
        Crop::Maiz => MAIZ_ADVICE,
        Crop::Papa => PAPA_ADVICE,
        Crop::Frijol => FRIJOL_ADVICE,
        Crop::Trigo => TRIGO_ADVICE,
    }
}

/// Pre-planting guidance for any crop identifier
pub fn advise(crop_id: &str) -> &'static [&'static str] {
    crop_id
        .parse::<Crop>()
        .map(advice_for)
        .unwrap_or(GENERIC_ADVICE)
}
