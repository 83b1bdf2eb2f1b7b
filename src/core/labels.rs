//! Label atlas layout: one atlas row per waypoint, drawn as sprites anchored
//! just in front of each panel.

use super::constants::LABEL_SIZE;
use super::scene::SceneRegistry;
use glam::{Vec2, Vec3};

/// RGBA8 pixels, not premultiplied, `rows` rows of equal height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelAtlas {
    pub width: u32,
    pub height: u32,
    pub rows: u32,
    pub rgba: Vec<u8>,
}

impl LabelAtlas {
    /// Single transparent texel and no rows; nothing gets drawn from it.
    pub fn blank() -> Self {
        Self {
            width: 1,
            height: 1,
            rows: 0,
            rgba: vec![0; 4],
        }
    }

    pub fn sprites(&self, registry: &SceneRegistry) -> Vec<LabelSprite> {
        label_sprites(registry, self.rows)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSprite {
    pub center: Vec3,
    pub size: Vec2,
    pub v_top: f32,
    pub v_bottom: f32,
}

/// Texture v range of atlas row `row` out of `rows`.
pub fn row_v(row: u32, rows: u32) -> Option<(f32, f32)> {
    if row >= rows {
        return None;
    }
    let n = rows as f32;
    Some((row as f32 / n, (row + 1) as f32 / n))
}

/// Sprites for every waypoint that has an atlas row.
pub fn label_sprites(registry: &SceneRegistry, rows: u32) -> Vec<LabelSprite> {
    (0..registry.len())
        .filter_map(|i| {
            let (v_top, v_bottom) = row_v(i as u32, rows)?;
            Some(LabelSprite {
                center: registry.label_anchor(i)?,
                size: LABEL_SIZE,
                v_top,
                v_bottom,
            })
        })
        .collect()
}
