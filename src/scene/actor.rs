//! Actors
//!
//! An actor is a positioned entity with a lifecycle state and an ordered
//! list of attached components. Actor types embed an [`ActorBody`] for the
//! shared data and override [`Actor::update_actor`] for per-variant
//! behavior, mirroring how each demo defines its own actors.
//!
//! The component list belongs to the actor alone: only [`ActorBody::attach`]
//! and [`ActorBody::detach`] ever mutate it. Dropping the actor drops every
//! owned component with it, exactly once.

use macroquad::prelude::Vec2;

use super::component::{ActorContext, Component, ComponentId};
use super::world::UpdatePass;

/// Handle identifying an actor within a [`super::World`].
///
/// Ids are handed out from a counter and never reused, so a stale handle
/// simply stops matching instead of aliasing a newer actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub(crate) u32);

impl ActorId {
    /// Placeholder carried by actors not yet registered with a world.
    pub const UNREGISTERED: ActorId = ActorId(u32::MAX);
}

/// Lifecycle state of an actor.
///
/// `Active` → `Dead` is a one-way terminal transition; the world destroys
/// dead actors at the end of the next update pass. `Paused` actors stay
/// registered (and drawable) but skip all update dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    #[default]
    Active,
    Paused,
    Dead,
}

/// 2D position, rotation (radians) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Transform at a position with no rotation and unit scale.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// A component slot: the handle, the update order captured at attach time,
/// and the owned component itself.
struct ComponentSlot {
    id: ComponentId,
    order: i32,
    component: Box<dyn Component>,
}

/// Shared data every actor carries: transform, lifecycle state and the
/// owned component list (kept ascending by update order).
pub struct ActorBody {
    pub transform: Transform,
    pub state: ActorState,
    pub(crate) id: ActorId,
    components: Vec<ComponentSlot>,
    next_component: u32,
}

impl ActorBody {
    /// Create an unregistered body at the origin.
    pub fn new() -> Self {
        Self {
            transform: Transform::default(),
            state: ActorState::Active,
            id: ActorId::UNREGISTERED,
            components: Vec::new(),
            next_component: 0,
        }
    }

    /// Create an unregistered body at a position.
    pub fn at(position: Vec2) -> Self {
        Self {
            transform: Transform::at(position),
            ..Self::new()
        }
    }

    /// The world-assigned handle, or [`ActorId::UNREGISTERED`].
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Attach a component, keeping the list ascending by update order.
    /// A new component goes before the first strictly greater entry, so
    /// equal orders keep attach order.
    pub fn attach(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = ComponentId(self.next_component);
        self.next_component += 1;
        let order = component.update_order();
        let at = self
            .components
            .iter()
            .position(|slot| slot.order > order)
            .unwrap_or(self.components.len());
        self.components.insert(
            at,
            ComponentSlot {
                id,
                order,
                component,
            },
        );
        id
    }

    /// Detach a component by handle, returning it to the caller.
    /// Detaching a handle that is not attached is a no-op returning `None`,
    /// so teardown code can remove defensively.
    pub fn detach(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let at = self.components.iter().position(|slot| slot.id == id)?;
        Some(self.components.remove(at).component)
    }

    /// Look up an attached component by handle.
    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.component.as_ref())
    }

    /// Mutable lookup of an attached component by handle.
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.components
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| slot.component.as_mut())
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Update orders of the attached components, in dispatch order.
    pub fn update_orders(&self) -> Vec<i32> {
        self.components.iter().map(|slot| slot.order).collect()
    }

    /// Run every attached component in ascending update order, handing each
    /// a view of this actor's transform and state.
    pub(crate) fn update_components(&mut self, dt: f32) {
        let mut ctx = ActorContext {
            transform: &mut self.transform,
            state: &mut self.state,
        };
        for slot in &mut self.components {
            slot.component.update(&mut ctx, dt);
        }
    }
}

impl Default for ActorBody {
    fn default() -> Self {
        Self::new()
    }
}

/// A game entity. Implementors embed an [`ActorBody`] and may override
/// [`Actor::update_actor`].
pub trait Actor {
    fn body(&self) -> &ActorBody;
    fn body_mut(&mut self) -> &mut ActorBody;

    /// Per-variant update hook, runs after component dispatch. Base does
    /// nothing. New actors spawned here go through `pass`.
    fn update_actor(&mut self, _dt: f32, _pass: &mut UpdatePass) {}

    /// Component dispatch then the [`Actor::update_actor`] hook.
    /// Dispatches only while the actor is `Active`.
    fn update(&mut self, dt: f32, pass: &mut UpdatePass) {
        if self.body().state != ActorState::Active {
            return;
        }
        self.body_mut().update_components(dt);
        self.update_actor(dt, pass);
    }
}

/// An actor with no behavior of its own; components do all the work.
/// Used for scenery like background tiles.
pub struct PlainActor {
    pub body: ActorBody,
}

impl PlainActor {
    pub fn new(body: ActorBody) -> Self {
        Self { body }
    }
}

impl Actor for PlainActor {
    fn body(&self) -> &ActorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }
}
