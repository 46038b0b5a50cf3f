//! Static phase tables, one per crop
//!
//! Ranges are inclusive on both ends, contiguous, and ascending. The last
//! phase of every crop is the harvest phase; its `max_day` of 200 is a soft
//! ceiling meaning "still harvestable until someone harvests".

use crate::models::{Crop, PhaseDefinition};

/// Cycle length used for crops without a phase table
pub const FALLBACK_CYCLE_DAYS: i64 = 100;

static MAIZ_PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        min_day: 0,
        max_day: 15,
        name: "Emergencia",
        recommendations: &[
            "Mantén humedad constante para favorecer la emergencia.",
            "Evita encharcamientos.",
            "Monitorea aparición de plántulas y controla malezas iniciales.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 16,
        max_day: 30,
        name: "Desarrollo vegetativo (V4)",
        recommendations: &[
            "Aplica fertilizante nitrogenado.",
            "Mantén el campo libre de malezas.",
            "Revisa el estado de las raíces y primer monitoreo de plagas.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 31,
        max_day: 55,
        name: "Floración",
        recommendations: &[
            "Evita estrés hídrico: riega si no hay lluvia.",
            "No apliques fertilizante en esta etapa.",
            "Revisa presencia de gusano cogollero y otras plagas.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 56,
        max_day: 90,
        name: "Llenado/Grano",
        recommendations: &[
            "Mantén humedad adecuada, pero no encharques.",
            "Prepara maquinaria para la cosecha.",
            "Monitorea aparición de enfermedades fúngicas (hongos).",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 91,
        max_day: 200,
        name: "Cosecha",
        recommendations: &[
            "Cosecha cuando los granos estén duros y secos.",
            "Evita riego, prioriza secado.",
            "No demores cosecha para evitar pérdidas por clima.",
        ],
        is_harvest: true,
    },
];

static PAPA_PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        min_day: 0,
        max_day: 20,
        name: "Siembra-Emergencia",
        recommendations: &[
            "Evita encharcamientos y suelos compactados.",
            "Aplica fertilizante al inicio del ciclo.",
            "Controla primeras malezas manualmente.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 21,
        max_day: 45,
        name: "Desarrollo vegetativo",
        recommendations: &[
            "Aplica abono potásico.",
            "Mantén la humedad constante.",
            "Monitorea aparición de insectos y enfermedades.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 46,
        max_day: 70,
        name: "Floración",
        recommendations: &[
            "Aumenta vigilancia de tizón tardío (hongos).",
            "Evita riegos excesivos.",
            "Fertiliza si el follaje es débil.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 71,
        max_day: 100,
        name: "Maduración",
        recommendations: &[
            "Reduce riego poco a poco.",
            "Monitorea maduración del follaje.",
            "Evita daño mecánico si cosechas.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 101,
        max_day: 200,
        name: "Cosecha",
        recommendations: &[
            "Cosecha cuando el follaje está seco o amarillo.",
            "No riegues más, deja secar el terreno.",
            "Evita cosechar en suelos muy húmedos.",
        ],
        is_harvest: true,
    },
];

static FRIJOL_PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        min_day: 0,
        max_day: 10,
        name: "Emergencia",
        recommendations: &[
            "Mantén la tierra suelta, sin costra.",
            "Evita riego excesivo y encharcamientos.",
            "Aplica insecticida si hay daño de trips.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 11,
        max_day: 25,
        name: "Vegetativo",
        recommendations: &[
            "Fertiliza si lo requiere.",
            "Realiza deshierbes frecuentes.",
            "Monitorea aparición de áfidos y mosca blanca.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 26,
        max_day: 40,
        name: "Floración",
        recommendations: &[
            "No riegues en exceso.",
            "Evita aplicaciones foliares innecesarias.",
            "Controla plagas: trips, gusano bellotero.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 41,
        max_day: 60,
        name: "Llenado de vainas",
        recommendations: &[
            "Mantén humedad, evita exceso de nitrógeno.",
            "Monitorea llenado y aparición de hongos.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 61,
        max_day: 200,
        name: "Cosecha",
        recommendations: &[
            "Cosecha cuando el 80% de las vainas estén maduras.",
            "Evita lluvias en cosecha, riesgo de desgrane.",
            "No fertilices más ni riegues.",
        ],
        is_harvest: true,
    },
];

static TRIGO_PHASES: [PhaseDefinition; 5] = [
    PhaseDefinition {
        min_day: 0,
        max_day: 14,
        name: "Emergencia",
        recommendations: &[
            "Riego ligero para facilitar emergencia.",
            "Evita costras y monitorea malezas.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 15,
        max_day: 28,
        name: "Macollamiento",
        recommendations: &[
            "Aplica nitrógeno y controla malezas.",
            "Riega solo si es necesario.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 29,
        max_day: 50,
        name: "Espigado",
        recommendations: &[
            "No realices aplicaciones de productos que puedan dañar la flor.",
            "Vigila roya y otros hongos.",
            "Evita sequía.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 51,
        max_day: 90,
        name: "Maduración",
        recommendations: &[
            "Reduce riegos, prepara para cosecha.",
            "No fertilices.",
            "Limpia maquinaria antes de cosechar.",
        ],
        is_harvest: false,
    },
    PhaseDefinition {
        min_day: 91,
        max_day: 200,
        name: "Cosecha",
        recommendations: &[
            "Cosecha cuando el grano esté seco y duro.",
            "No riegues más.",
            "Almacena en un lugar seco.",
        ],
        is_harvest: true,
    },
];

/// Phase table for a configured crop
pub fn phases_for(crop: Crop) -> &'static [PhaseDefinition] {
    match crop {
        Crop::Maiz => &MAIZ_PHASES,
        Crop::Papa => &PAPA_PHASES,
        Crop::Frijol => &FRIJOL_PHASES,
        Crop::Trigo => &TRIGO_PHASES,
    }
}

/// Phase table for a crop identifier; empty for unknown crops
pub fn lookup(crop_id: &str) -> &'static [PhaseDefinition] {
    crop_id
        .parse::<Crop>()
        .map(phases_for)
        .unwrap_or(&[])
}

/// Cycle length for a crop identifier, falling back to [`FALLBACK_CYCLE_DAYS`]
pub fn total_cycle_days(crop_id: &str) -> i64 {
    lookup(crop_id)
        .last()
        .map(|phase| phase.max_day)
        .unwrap_or(FALLBACK_CYCLE_DAYS)
}
