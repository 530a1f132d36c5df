//! Sprite components
//!
//! A [`SpriteComponent`] draws a textured rectangle centered on its owning
//! actor's position. The texture handle is cache-owned (see
//! [`crate::texture::TextureCache`]); the component keeps a cheap clone of
//! the handle plus the pixel dimensions captured when it was set.
//!
//! Paint order among sprites is decided by the world's draw list, not here;
//! [`SpriteComponent::draw_order`] is consulted once, at insertion.

use macroquad::prelude::{draw_texture_ex, vec2, DrawTextureParams, Rect, Texture2D, WHITE};

use super::actor::Transform;
use super::component::Component;

/// Default draw order when none is given.
pub const DEFAULT_DRAW_ORDER: i32 = 100;

/// A component that draws a textured quad at the owner's position.
pub struct SpriteComponent {
    texture: Option<Texture2D>,
    tex_width: f32,
    tex_height: f32,
    draw_order: i32,
}

impl SpriteComponent {
    /// Sprite with no texture yet; draws nothing until one is set.
    pub fn new(draw_order: i32) -> Self {
        Self {
            texture: None,
            tex_width: 0.0,
            tex_height: 0.0,
            draw_order,
        }
    }

    /// Capture the texture handle and its pixel dimensions for later
    /// destination-rect sizing.
    pub fn set_texture(&mut self, texture: Texture2D) {
        self.tex_width = texture.width();
        self.tex_height = texture.height();
        self.texture = Some(texture);
    }

    /// Paint-order key, fixed at construction.
    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    /// Cached texture dimensions in pixels; (0, 0) while untextured.
    pub fn size(&self) -> (f32, f32) {
        (self.tex_width, self.tex_height)
    }

    /// Draw the sprite centered on the owner's position, scaled by the
    /// owner's scale. A sprite without a texture draws nothing.
    pub fn draw(&self, transform: &Transform) {
        let Some(texture) = &self.texture else {
            return;
        };
        let Some(dest) = dest_rect(transform, self.tex_width, self.tex_height) else {
            return;
        };
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                rotation: transform.rotation,
                ..Default::default()
            },
        );
    }
}

impl Component for SpriteComponent {
    fn as_sprite(&self) -> Option<&SpriteComponent> {
        Some(self)
    }

    fn as_sprite_mut(&mut self) -> Option<&mut SpriteComponent> {
        Some(self)
    }
}

/// Destination rectangle for a sprite centered on `transform.position`,
/// sized by the texture dimensions scaled by the owner's scale.
/// `None` for degenerate dimensions (untextured or failed load).
pub fn dest_rect(transform: &Transform, tex_width: f32, tex_height: f32) -> Option<Rect> {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return None;
    }
    let w = tex_width * transform.scale;
    let h = tex_height * transform.scale;
    Some(Rect::new(
        transform.position.x - w / 2.0,
        transform.position.y - h / 2.0,
        w,
        h,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::Vec2;

    #[test]
    fn test_dest_rect_centered_and_scaled() {
        let mut transform = Transform::at(Vec2::new(100.0, 50.0));
        let rect = dest_rect(&transform, 64.0, 32.0).unwrap();
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (68.0, 34.0, 64.0, 32.0));

        transform.scale = 2.0;
        let rect = dest_rect(&transform, 64.0, 32.0).unwrap();
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (36.0, 18.0, 128.0, 64.0));
    }

    #[test]
    fn test_dest_rect_degenerate_is_none() {
        let transform = Transform::default();
        assert!(dest_rect(&transform, 0.0, 32.0).is_none());
        assert!(dest_rect(&transform, 32.0, 0.0).is_none());
    }

    #[test]
    fn test_untextured_sprite_has_zero_size() {
        let sprite = SpriteComponent::new(DEFAULT_DRAW_ORDER);
        assert_eq!(sprite.size(), (0.0, 0.0));
        assert_eq!(sprite.draw_order(), DEFAULT_DRAW_ORDER);
    }
}
