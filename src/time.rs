//! Frame timing
//!
//! Single-threaded frame pacing and delta-time clamping. Every demo loop
//! runs: input poll → clamped update → render → [`pace_frame`] →
//! `next_frame().await`.

use macroquad::prelude::get_time;

/// Upper bound on a single frame's delta time, in seconds. Keeps a stall
/// (breakpoint, OS preemption) from stepping the simulation far enough to
/// tunnel through the collision bands.
pub const MAX_DELTA: f32 = 0.05;

/// Target frame interval for the demos (60 FPS).
pub const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

/// Clamp a frame's delta time to [`MAX_DELTA`].
pub fn clamp_delta(delta: f32) -> f32 {
    if delta > MAX_DELTA {
        MAX_DELTA
    } else {
        delta
    }
}

/// Block until [`TARGET_FRAME_TIME`] has elapsed since `frame_start` (a
/// [`get_time`] stamp). Sleeps in 1 ms slices for the bulk of the wait,
/// then spin-waits the last ~2 ms for precision.
pub fn pace_frame(frame_start: f64) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < TARGET_FRAME_TIME {
            std::hint::spin_loop();
        }
    }
    // WASM: no thread::sleep; the browser paces frames anyway.
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < TARGET_FRAME_TIME {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_delta_sequence() {
        let inputs = [0.016, 0.016, 0.10];
        let clamped: Vec<f32> = inputs.iter().map(|&dt| clamp_delta(dt)).collect();
        assert_eq!(clamped, vec![0.016, 0.016, 0.05]);
    }

    #[test]
    fn test_clamp_delta_leaves_small_values_alone() {
        assert_eq!(clamp_delta(0.0), 0.0);
        assert_eq!(clamp_delta(MAX_DELTA), MAX_DELTA);
        assert_eq!(clamp_delta(MAX_DELTA + 0.001), MAX_DELTA);
    }
}
