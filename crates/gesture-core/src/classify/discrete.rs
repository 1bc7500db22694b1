//! Discrete key-triggered gesture inputs, sampled once per tick.

/// Snapshot of the three discrete local-input signals for one tick.
///
/// The two `*_pressed` fields are single-shot edge triggers (true only on
/// the tick the key went down); `adjust_held` is level-triggered and stays
/// true for every tick the key remains down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Single-shot confirm trigger (simulated pinch).
    pub confirm_pressed: bool,
    /// Held adjust trigger (simulated rotation); drives the continuous
    /// control value while held.
    pub adjust_held: bool,
    /// Single-shot toggle trigger; feeds the double-tap evaluator.
    pub toggle_pressed: bool,
}

/// Triangle-wave "ping-pong" of `t` between `0` and `length`.
///
/// The value runs `0 -> length -> 0 -> length -> ...` as `t` grows, so for
/// any non-negative `t` the result lies in `[0, length]`.  Deterministic:
/// no state, no clock, just arithmetic on the supplied elapsed time.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let wrapped = t.rem_euclid(2.0 * length);
    length - (wrapped - length).abs()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
