//! Scene Foundation Module
//!
//! An owning-list actor/component model for small 2D demos. Deliberately
//! not an ECS: each actor owns its attached components outright, and the
//! world owns every live actor.
//!
//! Key concepts:
//! - Actor: a positioned entity with a lifecycle state and owned components
//! - Component: an attachable unit of per-frame behavior or rendering
//! - World: owns all live actors plus the draw-order-sorted sprite list
//! - UpdatePass: explicit deferred-spawn context handed out during updates
//!
//! Design philosophy:
//! - Single-threaded, synchronous frame loop
//! - Structural mutation never happens while a collection is iterated
//! - Simple over flexible (a handful of rectangles, not thousands)

pub mod actor;
pub mod component;
pub mod sprite;
pub mod world;

// Re-export main types
pub use actor::{Actor, ActorBody, ActorId, ActorState, PlainActor, Transform};
pub use component::{ActorContext, Component, ComponentId};
pub use sprite::SpriteComponent;
pub use world::{UpdatePass, World};
