use crate::telemetry::entropy::EntropySource;

use common_data::server::data::telemetry::{
    TelemetrySnapshot, ALTITUDE_MAX, ALTITUDE_MIN, BATTERY_MAX, BATTERY_MIN, SIGNAL_STRENGTH_MAX,
    SIGNAL_STRENGTH_MIN, SPEED_MAX, SPEED_MIN,
};

/// Fabricates one telemetry snapshot.
///
/// Signal strength is drawn first, then battery, altitude and speed. Integer
/// draws are clamped to their ranges whatever the source hands back.
pub fn generate<S: EntropySource + ?Sized>(entropy: &mut S) -> TelemetrySnapshot {
    let signal_strength = entropy.uniform(SIGNAL_STRENGTH_MIN, SIGNAL_STRENGTH_MAX);

    let battery = entropy
        .uniform_int(BATTERY_MIN, BATTERY_MAX)
        .clamp(BATTERY_MIN, BATTERY_MAX);
    let altitude = entropy
        .uniform_int(ALTITUDE_MIN, ALTITUDE_MAX)
        .clamp(ALTITUDE_MIN, ALTITUDE_MAX);
    let speed = entropy
        .uniform_int(SPEED_MIN, SPEED_MAX)
        .clamp(SPEED_MIN, SPEED_MAX);

    return TelemetrySnapshot::from_readings(battery, altitude, speed, signal_strength);
}
