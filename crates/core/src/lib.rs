//! Core run-simulation logic. Keep this crate free of IO and platform
//! concerns; the host supplies decisions and a seed, and polls the outcome
//! records this crate returns.

pub mod combat;
pub mod config;
pub mod content;
pub mod event;
pub mod generator;
pub mod inventory;
pub mod items;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod state;
pub mod synergy;
pub mod weighted;

pub use combat::*;
pub use config::*;
pub use content::*;
pub use event::*;
pub use generator::*;
pub use inventory::*;
pub use items::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
pub use synergy::*;
pub use weighted::*;
