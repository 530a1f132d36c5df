//! Side-scroller skeleton
//!
//! The actor/component demo: scrolling background tiles behind a keyboard-
//! driven ship, all drawn through the world's draw-order-sorted sprite
//! list. Textures come from the path-keyed cache; a missing asset logs the
//! failure and that sprite simply draws nothing.

use macroquad::prelude::*;

use tinystage::scene::{
    Actor, ActorBody, ActorContext, Component, PlainActor, SpriteComponent, UpdatePass, World,
};
use tinystage::texture::{GpuTextureLoader, TextureCache};
use tinystage::time::{clamp_delta, pace_frame};

const WINDOW_WIDTH: f32 = 1024.0;
const WINDOW_HEIGHT: f32 = 700.0;

const SHIP_SPEED: f32 = 300.0;
const SCROLL_SPEED: f32 = 100.0;

/// Background sprites draw below the ship.
const TILE_DRAW_ORDER: i32 = 10;
const SHIP_DRAW_ORDER: i32 = 100;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Sidescroll v{}", tinystage::VERSION),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Scrolls its owner left and wraps it back past the right edge.
struct ScrollComponent {
    speed: f32,
    span: f32,
}

impl Component for ScrollComponent {
    fn update(&mut self, ctx: &mut ActorContext<'_>, dt: f32) {
        ctx.transform.position.x -= self.speed * dt;
        if ctx.transform.position.x < -self.span / 2.0 {
            ctx.transform.position.x += self.span * 2.0;
        }
    }

    fn update_order(&self) -> i32 {
        10
    }
}

/// The player ship: WASD movement clamped to the window.
struct ShipActor {
    body: ActorBody,
}

impl Actor for ShipActor {
    fn body(&self) -> &ActorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }

    fn update_actor(&mut self, dt: f32, _pass: &mut UpdatePass) {
        let mut dir = Vec2::ZERO;
        if is_key_down(KeyCode::W) {
            dir.y -= 1.0;
        }
        if is_key_down(KeyCode::S) {
            dir.y += 1.0;
        }
        if is_key_down(KeyCode::A) {
            dir.x -= 1.0;
        }
        if is_key_down(KeyCode::D) {
            dir.x += 1.0;
        }

        let pos = &mut self.body.transform.position;
        *pos += dir * SHIP_SPEED * dt;
        pos.x = pos.x.clamp(0.0, WINDOW_WIDTH);
        pos.y = pos.y.clamp(0.0, WINDOW_HEIGHT);
    }
}

/// Attach a textured sprite to a body and register it in the world's draw
/// list once the actor is added.
fn textured_sprite(
    cache: &mut TextureCache<GpuTextureLoader>,
    path: &str,
    draw_order: i32,
) -> SpriteComponent {
    let mut sprite = SpriteComponent::new(draw_order);
    if let Some(texture) = cache.get(path) {
        sprite.set_texture(texture);
    }
    sprite
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut cache = TextureCache::new(GpuTextureLoader);
    let mut world = World::new();

    // Background tiles, spaced across (and past) the window so the wrap
    // never leaves a gap.
    for i in 0..2 {
        let mut body = ActorBody::at(vec2(
            WINDOW_WIDTH / 2.0 + i as f32 * WINDOW_WIDTH,
            WINDOW_HEIGHT / 2.0,
        ));
        body.attach(Box::new(ScrollComponent {
            speed: SCROLL_SPEED,
            span: WINDOW_WIDTH,
        }));
        let sprite = textured_sprite(&mut cache, "assets/tile.png", TILE_DRAW_ORDER);
        let draw_order = sprite.draw_order();
        let component = body.attach(Box::new(sprite));
        let actor = world.add_actor(Box::new(PlainActor::new(body)));
        world.add_sprite(actor, component, draw_order);
    }

    // The ship.
    let mut body = ActorBody::at(vec2(200.0, WINDOW_HEIGHT / 2.0));
    let sprite = textured_sprite(&mut cache, "assets/ship.png", SHIP_DRAW_ORDER);
    let draw_order = sprite.draw_order();
    let component = body.attach(Box::new(sprite));
    let actor = world.add_actor(Box::new(ShipActor { body }));
    world.add_sprite(actor, component, draw_order);

    let mut running = true;
    while running {
        let frame_start = get_time();

        if is_key_down(KeyCode::Escape) {
            running = false;
        }

        let dt = clamp_delta(get_frame_time());
        world.update(dt);

        clear_background(Color::new(0.05, 0.05, 0.12, 1.0));
        world.draw_sprites();

        pace_frame(frame_start);
        next_frame().await;
    }
}
