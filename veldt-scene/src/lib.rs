//! Scene-side change coalescing and the region module host boundary.
//!
//! Simulation threads mark objects dirty many times per tick; the broadcast
//! loop transmits each distinct object at most once per drain. The update
//! queue is the structure that makes that guarantee.

pub mod module;
pub mod update_queue;

pub use module::{ModuleFactory, ModuleRegistry, RegionModule, SceneContext};
pub use update_queue::UpdateQueue;
