//! Affliction ledger and derived health for the Bestiary simulation.
//!
//! Monsters damage and heal each other. Nothing ever mutates a health value
//! directly: every hit or heal is recorded as an [`Affliction`] in the
//! afflicted monster's history, and current health is replayed from that
//! history on demand.
//!
//! # Architecture
//!
//! - [`ids`] -- Type-safe UUID wrappers ([`MonsterId`], [`AfflictionId`]).
//! - [`model`] -- [`Monster`] and [`Affliction`] records.
//! - [`config`] -- Creation defaults ([`LedgerConfig`]).
//! - [`store`] -- Arena of monsters in creation order ([`MonsterStore`]).
//! - [`integrity`] -- SHA-384 integrity keys and the store-wide audit.
//! - [`health`] -- Clamped health replay and the death check.
//! - [`service`] -- [`AfflictionService`], the entry point tying it together.
//!
//! # Health Invariant
//!
//! For every monster and every history:
//!
//! ```text
//! 0 <= current_health(monster) <= total_health(monster)
//! ```
//!
//! # Usage
//!
//! ```
//! use bestiary_ledger::{AfflictionService, Monster};
//!
//! let mut service = AfflictionService::new();
//! let weak = service.create_monster("Weak", 25).map(Monster::id).unwrap_or_default();
//! let strong = service.create_monster("Strong", 110).map(Monster::id).unwrap_or_default();
//!
//! service.apply_damage(weak, strong).ok();
//! service.apply_damage(weak, strong).ok();
//!
//! assert_eq!(service.current_health(strong).ok(), Some(50));
//! assert_eq!(service.is_dead(strong).ok(), Some(false));
//! ```

pub mod config;
pub mod health;
pub mod ids;
pub mod integrity;
pub mod model;
pub mod service;
pub mod store;

// Re-export primary types at crate root.
pub use config::LedgerConfig;
pub use ids::{AfflictionId, MonsterId};
pub use integrity::{IntegrityAnomaly, IntegrityResult};
pub use model::{Affliction, AfflictionKind, Monster};
pub use service::AfflictionService;
pub use store::MonsterStore;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when recording afflictions or querying monsters.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A participant of a new affliction is not in the store.
    #[error("invalid argument: {role} monster {id} is not in the store")]
    InvalidArgument {
        /// Which participant was missing ("provocator" or "afflicted").
        role: &'static str,
        /// The ID that failed to resolve.
        id: MonsterId,
    },

    /// An ID-keyed query or override named an unknown monster.
    #[error("monster not found: {0}")]
    MonsterNotFound(MonsterId),

    /// An internal error that should not occur in normal operation.
    #[error("internal ledger error: {0}")]
    InternalError(&'static str),
}
