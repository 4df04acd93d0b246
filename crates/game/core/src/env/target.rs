use std::cell::Cell;
use std::rc::Rc;

use crate::math::Vec2;

/// Read-only view of the tracked target.
pub trait TargetStatus {
    fn position(&self) -> Vec2;

    /// Concealed targets can be neither noticed nor caught.
    fn is_concealed(&self) -> bool;

    /// False once the target reference is gone (e.g. the player object was
    /// destroyed). The controller skips alert logic while unavailable.
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: TargetStatus + ?Sized> TargetStatus for &T {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn is_concealed(&self) -> bool {
        (**self).is_concealed()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<T: TargetStatus + ?Sized> TargetStatus for Rc<T> {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn is_concealed(&self) -> bool {
        (**self).is_concealed()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Published snapshot of the target, written by the host once per frame and
/// shared with every controller that hunts it.
///
/// Single-threaded by construction: clones share the same cells through an
/// [`Rc`], so the host can keep one handle for writing while controllers keep
/// theirs for reading.
#[derive(Clone, Debug, Default)]
pub struct TargetBeacon {
    inner: Rc<BeaconCells>,
}

#[derive(Debug)]
struct BeaconCells {
    position: Cell<Vec2>,
    concealed: Cell<bool>,
    available: Cell<bool>,
}

impl Default for BeaconCells {
    fn default() -> Self {
        Self {
            position: Cell::new(Vec2::ZERO),
            concealed: Cell::new(false),
            available: Cell::new(true),
        }
    }
}

impl TargetBeacon {
    pub fn new(position: Vec2) -> Self {
        let beacon = Self::default();
        beacon.publish(position, false);
        beacon
    }

    /// Overwrites the published position and concealment.
    pub fn publish(&self, position: Vec2, concealed: bool) {
        self.inner.position.set(position);
        self.inner.concealed.set(concealed);
    }

    pub fn set_position(&self, position: Vec2) {
        self.inner.position.set(position);
    }

    pub fn set_concealed(&self, concealed: bool) {
        self.inner.concealed.set(concealed);
    }

    /// Marks the target as gone for every reader of this beacon.
    pub fn retire(&self) {
        self.inner.available.set(false);
    }
}

impl TargetStatus for TargetBeacon {
    fn position(&self) -> Vec2 {
        self.inner.position.get()
    }

    fn is_concealed(&self) -> bool {
        self.inner.concealed.get()
    }

    fn is_available(&self) -> bool {
        self.inner.available.get()
    }
}
