//! Status decay and restoration of the four meters.
//!
//! Every tick erodes each meter by its fixed [`decay_rate`]; activities
//! restore a single meter by a fixed amount. Both go through [`clamp_meter`],
//! so a meter can never leave `[0, 100]` whichever path touched it.
//!
//! Nothing here decides whether the game is over. The caller runs the
//! game-over check on the result.

use archipelago_types::{Meter, Meters};

use crate::rules::{METER_MAX, METER_MIN, decay_rate};

/// Clamp a meter value into `[0, 100]`.
///
/// `NaN` cannot arise from the fixed rates, but is mapped to the floor to
/// keep the range guarantee total.
pub fn clamp_meter(value: f64) -> f64 {
    if value.is_nan() {
        return METER_MIN;
    }
    value.clamp(METER_MIN, METER_MAX)
}

/// Apply one tick of decay to all four meters.
pub fn decay(meters: &Meters) -> Meters {
    let mut next = *meters;
    for meter in Meter::ALL {
        let slot = next.get_mut(meter);
        *slot = clamp_meter(*slot - decay_rate(meter));
    }
    next
}

/// Raise a single meter by `amount`, capped at 100.
pub fn restore(meters: &Meters, meter: Meter, amount: f64) -> Meters {
    let mut next = *meters;
    let slot = next.get_mut(meter);
    *slot = clamp_meter(*slot + amount);
    next
}
