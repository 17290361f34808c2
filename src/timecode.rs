//! Frame/seconds conversion helpers.
//!
//! The engine addresses time exclusively in whole frames; hosts and the
//! duration policy convert to and from seconds with these helpers.

/// Discrete position or extent on the timeline axis, in frames.
///
/// Signed so that raw host input (a drag past the origin, a clock report)
/// can be represented before clamping; stored state never goes negative.
pub type Frame = i64;

/// Convert seconds to the nearest frame count using the given frame rate.
pub fn frames_from_seconds(seconds: f64, frame_rate: u32) -> Frame {
    (seconds * effective_rate(frame_rate) as f64).round() as Frame
}

/// Convert a frame position back to seconds using the given frame rate.
pub fn seconds_from_frames(frame: Frame, frame_rate: u32) -> f64 {
    frame as f64 / effective_rate(frame_rate) as f64
}

/// Frame count for a whole number of seconds. Exact, no rounding.
pub fn frames_for_whole_seconds(seconds: i64, frame_rate: u32) -> Frame {
    seconds * effective_rate(frame_rate) as i64
}

/// Frame rates below 1 fps are treated as 1.
fn effective_rate(frame_rate: u32) -> u32 {
    frame_rate.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_to_frames_and_back() {
        assert_eq!(frames_from_seconds(2.0, 30), 60);
        assert_eq!(frames_from_seconds(0.5, 24), 12);
        assert!((seconds_from_frames(60, 30) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_nearest_frame() {
        assert_eq!(frames_from_seconds(1.0 / 30.0, 30), 1);
        assert_eq!(frames_from_seconds(0.516, 30), 15);
        assert_eq!(frames_from_seconds(0.517, 30), 16);
    }

    #[test]
    fn whole_seconds_are_exact() {
        assert_eq!(frames_for_whole_seconds(10, 30), 300);
        assert_eq!(frames_for_whole_seconds(5, 24), 120);
        assert_eq!(frames_for_whole_seconds(0, 60), 0);
    }

    #[test]
    fn zero_frame_rate_is_treated_as_one() {
        assert_eq!(frames_from_seconds(3.0, 0), 3);
        assert_eq!(frames_for_whole_seconds(3, 0), 3);
        assert!((seconds_from_frames(3, 0) - 3.0).abs() < f64::EPSILON);
    }
}
