//! Catch notifications collected from the enemy controllers.

use std::cell::RefCell;
use std::rc::Rc;

use hollows_core::{CatchEvent, CatchListener};

/// Shared log the stage drains after the enemies have ticked.
///
/// Each enemy's controller gets a [`CatchRecorder`] tagged with its index,
/// so the log holds one entry per catch episode.
#[derive(Clone, Debug, Default)]
pub struct CatchLog {
    entries: Rc<RefCell<Vec<(usize, CatchEvent)>>>,
}

impl CatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener reporting catches by enemy `index` into this log.
    pub fn recorder(&self, index: usize) -> CatchRecorder {
        CatchRecorder {
            index,
            log: self.clone(),
        }
    }

    /// Takes every recorded catch, oldest first.
    pub fn drain(&self) -> Vec<(usize, CatchEvent)> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[derive(Debug)]
pub struct CatchRecorder {
    index: usize,
    log: CatchLog,
}

impl CatchListener for CatchRecorder {
    fn on_target_caught(&mut self, event: &CatchEvent) {
        self.log.entries.borrow_mut().push((self.index, *event));
    }
}
