//! TINYSTAGE: small self-contained 2D game demos
//!
//! Three demos share this library, each owning its fixed-size window and
//! single-threaded frame loop:
//! - `pong`: single-paddle Pong against the right wall
//! - `pong-duel`: two paddles, three balls
//! - `sidescroll`: an actor/component skeleton with textured sprites
//!
//! The reusable core is the [`scene`] module: an owning-list Actor +
//! Component model (not an ECS) with deferred insertion during update
//! passes, a draw-order-sorted sprite list, and a path-keyed texture cache.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod pong;
pub mod scene;
pub mod texture;
pub mod time;
