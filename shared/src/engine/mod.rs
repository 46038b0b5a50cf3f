//! Phase inference and recommendation engine
//!
//! Every function here is pure: it reads only its arguments and the static
//! phase tables, so calls can run concurrently and in any order.

pub mod advisory;
pub mod overlay;
pub mod phase_table;
pub mod pre_planting;
pub mod progress;
pub mod resolver;

pub use advisory::{build_advisory, elapsed_days, Advisory};
pub use overlay::overlay;
pub use phase_table::lookup;
pub use pre_planting::advise;
pub use progress::compute;
pub use resolver::resolve;

use crate::models::{PhaseResolution, WeatherSnapshot};

/// Resolve the phase and merge in weather advisories
///
/// The "no information" phase of an unknown crop is returned as is; there
/// is no crop context to attach weather advice to.
pub fn evaluate(
    crop_id: &str,
    elapsed_days: i64,
    weather: Option<&WeatherSnapshot>,
) -> PhaseResolution {
    let mut resolution = resolve(crop_id, elapsed_days);
    if resolution.is_known_crop {
        resolution.phase.recommendations = overlay(&resolution.phase, weather);
    }
    resolution
}
