//! Maps a crop and elapsed day count to a growth phase

use crate::models::{PhaseDefinition, PhaseResolution, ResolvedPhase};

use super::phase_table;

/// Phase name for crops without a phase table
pub const NO_INFORMATION_PHASE: &str = "Sin información";

pub const NO_INFORMATION_RECOMMENDATIONS: &[&str] = &[
    "No hay recomendaciones configuradas para este cultivo.",
    "Consulta con un asesor agrónomo o revisa la configuración del sistema.",
];

/// Phase name once elapsed days run past the harvest ceiling
pub const OVERDUE_PHASE: &str = "Post-cosecha (atrasado)";

/// Replaces the harvest phase's own recommendations
pub const OVERDUE_RECOMMENDATIONS: &[&str] = &[
    "Ciclo superado. Realiza cosecha urgente si no lo hiciste.",
    "No apliques riego ni fertilizante. Prepara el terreno para el siguiente ciclo.",
];

/// First phase whose inclusive range contains `elapsed_days`
///
/// Shared boundary days go to the earlier phase.
pub fn find_phase(phases: &[PhaseDefinition], elapsed_days: i64) -> Option<&PhaseDefinition> {
    phases.iter().find(|phase| phase.contains(elapsed_days))
}

/// Overdue phase derived from the crop's last phase
pub fn overdue_phase(last: &PhaseDefinition) -> PhaseDefinition {
    PhaseDefinition {
        name: OVERDUE_PHASE,
        recommendations: OVERDUE_RECOMMENDATIONS,
        is_harvest: true,
        ..*last
    }
}

/// Resolve the phase for a crop identifier and elapsed day count
///
/// Does not check that the planting date is in the past; callers gate on
/// [`crate::validation::validate_planting_date`] first. A negative count
/// matches no phase and therefore comes back overdue.
pub fn resolve(crop_id: &str, elapsed_days: i64) -> PhaseResolution {
    let phases = phase_table::lookup(crop_id);

    let Some(last) = phases.last() else {
        return PhaseResolution {
            phase: ResolvedPhase {
                phase_name: NO_INFORMATION_PHASE.to_string(),
                is_harvest: false,
                recommendations: NO_INFORMATION_RECOMMENDATIONS
                    .iter()
                    .map(|rec| rec.to_string())
                    .collect(),
            },
            is_overdue: false,
            is_known_crop: false,
        };
    };

    match find_phase(phases, elapsed_days) {
        Some(phase) => PhaseResolution {
            phase: ResolvedPhase::from(phase),
            is_overdue: false,
            is_known_crop: true,
        },
        None => PhaseResolution {
            phase: ResolvedPhase::from(&overdue_phase(last)),
            is_overdue: true,
            is_known_crop: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_first_day() {
        let resolution = resolve("Maíz", 0);
        assert_eq!(resolution.phase.phase_name, "Emergencia");
        assert!(!resolution.phase.is_harvest);
        assert!(!resolution.is_overdue);
        assert!(resolution.is_known_crop);
    }

    #[test]
    fn test_resolve_boundaries() {
        assert_eq!(resolve("Maíz", 15).phase.phase_name, "Emergencia");
        assert_eq!(resolve("Maíz", 16).phase.phase_name, "Desarrollo vegetativo (V4)");
        assert_eq!(resolve("Papa", 100).phase.phase_name, "Maduración");
        assert_eq!(resolve("Papa", 101).phase.phase_name, "Cosecha");
    }

    #[test]
    fn test_resolve_harvest_ceiling() {
        let resolution = resolve("Frijol", 200);
        assert_eq!(resolution.phase.phase_name, "Cosecha");
        assert!(resolution.phase.is_harvest);
        assert!(!resolution.is_overdue);
    }

    #[test]
    fn test_resolve_overdue_replaces_recommendations() {
        let resolution = resolve("Trigo", 201);
        assert!(resolution.is_overdue);
        assert!(resolution.phase.is_harvest);
        assert_eq!(resolution.phase.phase_name, OVERDUE_PHASE);
        assert_eq!(resolution.phase.recommendations, OVERDUE_RECOMMENDATIONS);
    }

    #[test]
    fn test_resolve_negative_days_is_overdue() {
        assert!(resolve("Maíz", -3).is_overdue);
    }

    #[test]
    fn test_resolve_unknown_crop() {
        let resolution = resolve("Arroz", 40);
        assert!(!resolution.is_known_crop);
        assert!(!resolution.is_overdue);
        assert!(!resolution.phase.is_harvest);
        assert_eq!(resolution.phase.phase_name, NO_INFORMATION_PHASE);
        assert_eq!(resolution.phase.recommendations.len(), 2);
    }

    #[test]
    fn test_overdue_phase_keeps_last_range() {
        let last = phase_table::lookup("Maíz").last().unwrap();
        let overdue = overdue_phase(last);
        assert_eq!(overdue.min_day, last.min_day);
        assert_eq!(overdue.max_day, last.max_day);
        assert_eq!(overdue.name, OVERDUE_PHASE);
    }

    #[test]
    fn test_find_phase_prefers_earlier_on_overlap() {
        let overlapping = [
            PhaseDefinition {
                min_day: 0,
                max_day: 10,
                name: "A",
                recommendations: &[],
                is_harvest: false,
            },
            PhaseDefinition {
                min_day: 10,
                max_day: 20,
                name: "B",
                recommendations: &[],
                is_harvest: true,
            },
        ];
        assert_eq!(find_phase(&overlapping, 10).map(|p| p.name), Some("A"));
    }
}
