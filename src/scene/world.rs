//! Game World
//!
//! The world owns every live actor and the draw-order-sorted sprite list.
//! Its one structural rule: the live actor list is never inserted into or
//! removed from while it is being iterated. Actors spawned during an update
//! pass go through the [`UpdatePass`] handed to each actor and are merged
//! at the tail once the pass ends; dead actors are collected and destroyed
//! strictly after that merge.
//!
//! The sprite list holds handles, not components: each entry names an
//! actor, one of its components, and the draw order captured at insertion.
//! Entries whose actor has since died are skipped at draw time and purged
//! when the actor is removed.

use super::actor::{Actor, ActorId, ActorState};
use super::component::ComponentId;

/// Entry in the draw list: a handle pair plus the draw order captured when
/// the sprite was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpriteEntry {
    actor: ActorId,
    component: ComponentId,
    draw_order: i32,
}

/// Deferred-spawn context handed to actors during an update pass.
///
/// Spawning through the pass keeps the live list structurally untouched
/// while it is iterated; everything spawned here joins the tail of the
/// live list, in spawn order, as soon as the pass ends.
#[derive(Default)]
pub struct UpdatePass {
    spawned: Vec<Box<dyn Actor>>,
}

impl UpdatePass {
    /// Queue an actor for insertion after the current pass.
    pub fn spawn(&mut self, actor: Box<dyn Actor>) {
        self.spawned.push(actor);
    }

    /// Number of actors queued so far in this pass.
    pub fn spawned_count(&self) -> usize {
        self.spawned.len()
    }
}

/// Owner of all live actors, the sprite draw list and the actor id counter.
pub struct World {
    actors: Vec<Box<dyn Actor>>,
    sprites: Vec<SpriteEntry>,
    next_actor: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            sprites: Vec::new(),
            next_actor: 0,
        }
    }

    // =========================================================================
    // Actor registry
    // =========================================================================

    /// Register an actor and return its handle. Appends directly to the
    /// live list; mid-pass spawning must go through [`UpdatePass::spawn`]
    /// instead (the borrow rules leave no other way in).
    pub fn add_actor(&mut self, mut actor: Box<dyn Actor>) -> ActorId {
        let id = self.stamp(actor.as_mut());
        self.actors.push(actor);
        id
    }

    fn stamp(&mut self, actor: &mut dyn Actor) -> ActorId {
        let id = ActorId(self.next_actor);
        self.next_actor += 1;
        actor.body_mut().id = id;
        id
    }

    /// Remove an actor (and its sprite entries) by handle. Removing a
    /// handle that is not registered, including a second removal of the
    /// same actor, is a deliberate no-op.
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(at) = self.actors.iter().position(|a| a.body().id() == id) {
            self.actors.remove(at);
            self.sprites.retain(|entry| entry.actor != id);
        }
    }

    /// Look up a live actor by handle.
    pub fn actor(&self, id: ActorId) -> Option<&dyn Actor> {
        self.actors
            .iter()
            .find(|a| a.body().id() == id)
            .map(|a| a.as_ref())
    }

    /// Mutable lookup of a live actor by handle.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut (dyn Actor + 'static)> {
        self.actors
            .iter_mut()
            .find(|a| a.body().id() == id)
            .map(|a| a.as_mut())
    }

    /// Number of live actors.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Handles of the live actors, in registration order.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.actors.iter().map(|a| a.body().id()).collect()
    }

    // =========================================================================
    // Update pass
    // =========================================================================

    /// One update pass: dispatch every live actor, merge mid-pass spawns to
    /// the tail in spawn order, then destroy every actor that is now dead.
    /// Destruction happens strictly after the merge, so nothing is dropped
    /// while a traversal could still reach it.
    pub fn update(&mut self, dt: f32) {
        let mut pass = UpdatePass::default();
        for actor in &mut self.actors {
            actor.update(dt, &mut pass);
        }

        // Merge spawned actors, preserving spawn order.
        for mut actor in pass.spawned {
            self.stamp(actor.as_mut());
            self.actors.push(actor);
        }

        // Reap the dead. Dropping the box drops its components with it.
        let dead: Vec<ActorId> = self
            .actors
            .iter()
            .filter(|a| a.body().state == ActorState::Dead)
            .map(|a| a.body().id())
            .collect();
        for id in dead {
            self.remove_actor(id);
        }
    }

    // =========================================================================
    // Sprite draw list
    // =========================================================================

    /// Register a sprite component in the draw list. The new entry goes
    /// before the first entry with a strictly greater draw order, so equal
    /// orders keep insertion order and the list stays ascending.
    pub fn add_sprite(&mut self, actor: ActorId, component: ComponentId, draw_order: i32) {
        let at = self
            .sprites
            .iter()
            .position(|entry| entry.draw_order > draw_order)
            .unwrap_or(self.sprites.len());
        self.sprites.insert(
            at,
            SpriteEntry {
                actor,
                component,
                draw_order,
            },
        );
    }

    /// Remove a sprite entry by identity; absent entries are a no-op.
    pub fn remove_sprite(&mut self, actor: ActorId, component: ComponentId) {
        self.sprites
            .retain(|entry| !(entry.actor == actor && entry.component == component));
    }

    /// Number of registered sprite entries.
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Draw orders in list order (ascending by construction).
    pub fn sprite_draw_orders(&self) -> Vec<i32> {
        self.sprites.iter().map(|entry| entry.draw_order).collect()
    }

    /// Draw every registered sprite in ascending draw order against the
    /// owning actor's transform. Entries whose actor or component has gone
    /// away are skipped, not errors.
    pub fn draw_sprites(&self) {
        for entry in &self.sprites {
            let Some(actor) = self.actor(entry.actor) else {
                continue;
            };
            let body = actor.body();
            let Some(sprite) = body.component(entry.component).and_then(|c| c.as_sprite()) else {
                continue;
            };
            sprite.draw(&body.transform);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
