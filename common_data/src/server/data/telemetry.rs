use serde::{Deserialize, Serialize};

pub const BATTERY_MIN: u32 = 20;
pub const BATTERY_MAX: u32 = 100;

pub const ALTITUDE_MIN: u32 = 0;
pub const ALTITUDE_MAX: u32 = 120;
pub const MAX_ALTITUDE: u32 = 500;

pub const SPEED_MIN: u32 = 0;
pub const SPEED_MAX: u32 = 25;
pub const MAX_SPEED: u32 = 25;

// Raw signal strength is drawn from [MIN, MAX)
pub const SIGNAL_STRENGTH_MIN: f64 = 50.0;
pub const SIGNAL_STRENGTH_MAX: f64 = 100.0;
pub const STRONG_SIGNAL_THRESHOLD: f64 = 75.0;

pub const SIGNAL_BARS_MIN: u32 = 1;
pub const SIGNAL_BARS_MAX: u32 = 4;
const SIGNAL_BAR_WIDTH: f64 = 25.0;

pub const RESOLUTION: &str = "4K";
pub const FRAME_RATE: u32 = 30;

// Seconds, 2:15 elapsed and 18:45 remaining
pub const FLIGHT_TIME: u32 = 135;
pub const FLIGHT_TIME_REMAINING: u32 = 1125;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Strong,
    Weak,
}

impl Signal {
    /// Strong only when the raw strength is strictly above the threshold.
    pub fn from_strength(signal_strength: f64) -> Signal {
        if signal_strength > STRONG_SIGNAL_THRESHOLD {
            return Signal::Strong;
        }

        return Signal::Weak;
    }
}

/// Coarse bar count shown in place of the raw percentage.
///
/// Floor division by 25 clamped to 1..=4. Clients already depend on this
/// exact bucketing, so keep it even though 50..100 only ever lands on 2 or 3.
pub fn signal_bars(signal_strength: f64) -> u32 {
    let bars = (signal_strength / SIGNAL_BAR_WIDTH).floor();

    if bars.is_nan() || bars < SIGNAL_BARS_MIN as f64 {
        return SIGNAL_BARS_MIN;
    }

    if bars > SIGNAL_BARS_MAX as f64 {
        return SIGNAL_BARS_MAX;
    }

    return bars as u32;
}

/// One fabricated telemetry reading, as served by `GET /telemetry`.
///
/// Field order is the wire order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    pub battery: u32,
    pub altitude: u32,
    pub max_altitude: u32,
    pub speed: u32,
    pub max_speed: u32,
    pub signal: Signal,
    pub signal_bars: u32,
    pub resolution: String,
    pub frame_rate: u32,
    pub flight_time: u32,
    pub flight_time_remaining: u32,
}

impl TelemetrySnapshot {
    /// Builds a snapshot from drawn readings. The raw signal strength only
    /// feeds `signal` and `signal_bars` and is not kept.
    pub fn from_readings(
        battery: u32,
        altitude: u32,
        speed: u32,
        signal_strength: f64,
    ) -> TelemetrySnapshot {
        return TelemetrySnapshot {
            battery,
            altitude,
            max_altitude: MAX_ALTITUDE,
            speed,
            max_speed: MAX_SPEED,
            signal: Signal::from_strength(signal_strength),
            signal_bars: signal_bars(signal_strength),
            resolution: RESOLUTION.to_string(),
            frame_rate: FRAME_RATE,
            flight_time: FLIGHT_TIME,
            flight_time_remaining: FLIGHT_TIME_REMAINING,
        };
    }
}
