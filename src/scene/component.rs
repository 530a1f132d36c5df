//! Components
//!
//! A component is an attachable unit of per-frame behavior or rendering
//! owned by exactly one actor. Components never outlive their owner: the
//! actor's component list owns them outright.
//!
//! During dispatch each component receives an [`ActorContext`], a view of
//! the owning actor's transform and lifecycle state. That view is all a
//! component may touch; it cannot reach the world or other actors.

use super::actor::{ActorState, Transform};
use super::sprite::SpriteComponent;

/// Handle identifying a component within its owning actor.
/// Handles are per-actor and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) u32);

/// View of the owning actor handed to components during update.
pub struct ActorContext<'a> {
    pub transform: &'a mut Transform,
    pub state: &'a mut ActorState,
}

/// An attachable unit of per-frame behavior or rendering.
pub trait Component {
    /// Per-frame behavior hook; base does nothing.
    fn update(&mut self, _ctx: &mut ActorContext<'_>, _dt: f32) {}

    /// Priority for per-actor update dispatch, ascending. Must stay fixed
    /// for the component's lifetime; it is captured at attach time.
    fn update_order(&self) -> i32 {
        100
    }

    /// Downcast hook for the render pass; sprite components override this.
    fn as_sprite(&self) -> Option<&SpriteComponent> {
        None
    }

    /// Mutable variant of [`Component::as_sprite`].
    fn as_sprite_mut(&mut self) -> Option<&mut SpriteComponent> {
        None
    }
}
