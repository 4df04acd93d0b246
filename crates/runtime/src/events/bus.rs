//! Per-frame sound bus.

use hollows_core::SoundEvent;

/// Collects the sounds raised while a frame is being simulated.
///
/// Sounds are queued rather than delivered on the spot so that every enemy
/// hears them at the same point of the frame, after the player and triggers
/// have updated. [`SoundBus::drain`] hands them out in raise order, which
/// keeps the controllers' "latest sound wins" rule intact.
#[derive(Debug, Default)]
pub struct SoundBus {
    pending: Vec<SoundEvent>,
}

impl SoundBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, event: SoundEvent) {
        tracing::debug!("SoundBus: {} at {}", event.cause, event.position);
        self.pending.push(event);
    }

    /// Takes every queued sound, oldest first.
    pub fn drain(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
