//! Timed input tracks for headless runs.

use serde::{Deserialize, Serialize};

use crate::api::FrameInput;

/// One input held for `duration` seconds.
///
/// Presses in `input` (toggles, interact, equip, use, craft, noise) fire on
/// the segment's first frame only; movement and sprint are held for all of
/// it. Every segment lasts at least one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub duration: f32,
    #[serde(default)]
    pub input: FrameInput,
}

/// Ordered list of [`ScriptSegment`]s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub segments: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment (builder pattern).
    #[must_use]
    pub fn then(mut self, duration: f32, input: FrameInput) -> Self {
        self.segments.push(ScriptSegment { duration, input });
        self
    }

    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration.max(0.0)).sum()
    }

    /// Expands the script into per-frame inputs for a fixed `delta_time`.
    pub fn frames(&self, delta_time: f32) -> ScriptFrames<'_> {
        ScriptFrames {
            segments: &self.segments,
            delta_time,
            index: 0,
            frame_in_segment: 0,
        }
    }
}

/// Iterator returned by [`InputScript::frames`].
#[derive(Debug)]
pub struct ScriptFrames<'a> {
    segments: &'a [ScriptSegment],
    delta_time: f32,
    index: usize,
    frame_in_segment: u32,
}

impl Iterator for ScriptFrames<'_> {
    type Item = FrameInput;

    fn next(&mut self) -> Option<FrameInput> {
        loop {
            let segment = self.segments.get(self.index)?;
            if self.frame_in_segment >= frame_count(segment.duration, self.delta_time) {
                self.index += 1;
                self.frame_in_segment = 0;
                continue;
            }

            let input = if self.frame_in_segment == 0 {
                segment.input.clone()
            } else {
                segment.input.held()
            };
            self.frame_in_segment += 1;
            return Some(input);
        }
    }
}

/// Frames needed to cover `duration`, rounding up, never zero.
fn frame_count(duration: f32, delta_time: f32) -> u32 {
    if !(delta_time > 0.0) || !duration.is_finite() || duration <= 0.0 {
        return 1;
    }
    // Tolerate float noise so 1.0 / 0.1 is 10 frames, not 11.
    ((duration / delta_time) - 1e-4).ceil().max(1.0) as u32
}
