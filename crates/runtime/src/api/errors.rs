//! Unified error types surfaced by the runtime API.
//!
//! Stage construction fails with [`RuntimeError`]; in-game actions (pickups,
//! item use, crafting) return the narrower [`InventoryError`] and
//! [`CraftError`], which the stage reports as rejected actions instead of
//! aborting the frame.
use hollows_core::{ConfigError, ErrorSeverity, HollowsError};
use thiserror::Error;

use crate::session::Outcome;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("stage requires a level before building")]
    MissingLevel,

    #[error("enemy '{enemy}' has invalid tuning")]
    EnemyConfig {
        enemy: String,
        #[source]
        source: ConfigError,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Craft(#[from] CraftError),

    #[error("no item equipped")]
    NothingEquipped,

    #[error("'{item}' cannot be used")]
    NotUsable { item: String },

    #[error("session already ended: {outcome}")]
    SessionOver { outcome: Outcome },
}

impl HollowsError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingLevel | Self::EnemyConfig { .. } => ErrorSeverity::Validation,
            Self::Inventory(e) => e.severity(),
            Self::Craft(e) => e.severity(),
            Self::NothingEquipped | Self::NotUsable { .. } | Self::SessionOver { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingLevel => "RUNTIME_MISSING_LEVEL",
            Self::EnemyConfig { .. } => "RUNTIME_ENEMY_CONFIG",
            Self::Inventory(e) => e.error_code(),
            Self::Craft(e) => e.error_code(),
            Self::NothingEquipped => "RUNTIME_NOTHING_EQUIPPED",
            Self::NotUsable { .. } => "RUNTIME_NOT_USABLE",
            Self::SessionOver { .. } => "RUNTIME_SESSION_OVER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("'{item}' is not in the inventory")]
    NotHeld { item: String },

    #[error("cannot remove {requested} '{item}', only {held} held")]
    Insufficient {
        item: String,
        held: u32,
        requested: u32,
    },
}

impl HollowsError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotHeld { .. } => "INVENTORY_NOT_HELD",
            Self::Insufficient { .. } => "INVENTORY_INSUFFICIENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CraftError {
    #[error("no recipe takes {placed:?}")]
    NoRecipe { placed: Vec<String> },

    #[error("'{recipe}' needs its inputs in the order {expected:?}")]
    WrongOrder {
        recipe: String,
        expected: Vec<String>,
    },

    #[error("crafting '{recipe}' needs {needed} '{item}', only {held} held")]
    MissingInput {
        recipe: String,
        item: String,
        needed: u32,
        held: u32,
    },
}

impl HollowsError for CraftError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRecipe { .. } => "CRAFT_NO_RECIPE",
            Self::WrongOrder { .. } => "CRAFT_WRONG_ORDER",
            Self::MissingInput { .. } => "CRAFT_MISSING_INPUT",
        }
    }
}
