//! Fallback colours, surface styles and best-effort texture upgrades.
//!
//! Every material starts as a flat colour. Texture loads are fire-and-forget:
//! a pending table is polled each frame, a loaded image upgrades the material,
//! and a failed one is dropped with a debug log. Nothing retries and nothing
//! times out; an image that never arrives simply leaves the fallback in place.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::bodies::BodyId;

/// Plugin providing texture requests and the polling system.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureRequests>()
            .add_systems(Update, poll_texture_loads);
    }
}

// === Paths ===

/// Conventional surface texture path under `assets/`.
pub fn surface_texture_path(id: BodyId) -> String {
    match id {
        BodyId::Ceres | BodyId::Vesta | BodyId::Pallas | BodyId::Hygiea => {
            format!("textures/asteroids/{id}.jpg")
        }
        _ => format!("textures/{id}/{id}.jpg"),
    }
}

pub const EARTH_CLOUDS_PATH: &str = "textures/earth/earth-clouds.png";

/// Ring texture, for the bodies that ship one.
pub fn ring_texture_path(id: BodyId) -> Option<String> {
    match id {
        BodyId::Saturn | BodyId::Jupiter => Some(format!("textures/{id}/{id}-rings.png")),
        _ => None,
    }
}

// === Fallback appearance ===

fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Flat colour used until (or instead of) a texture.
pub fn fallback_color(id: BodyId) -> Color {
    hex(match id {
        BodyId::Sun => 0xFDB813,
        BodyId::Mercury => 0x8C7853,
        BodyId::Venus => 0xFFC649,
        BodyId::Earth => 0x6B93D6,
        BodyId::Mars => 0xCD5C5C,
        BodyId::Jupiter => 0xD8CA9D,
        BodyId::Saturn => 0xFAD5A5,
        BodyId::Uranus => 0x4FD0E7,
        BodyId::Neptune => 0x4B70DD,
        BodyId::Moon => 0xC0C0C0,
        BodyId::Phobos => 0x8C6239,
        BodyId::Deimos => 0xA0713D,
        BodyId::Io => 0xFFFF99,
        BodyId::Europa => 0xE6F2FF,
        BodyId::Ganymede => 0xA0A0A0,
        BodyId::Callisto => 0x666666,
        BodyId::Titan => 0xCC9966,
        BodyId::Enceladus => 0xF0F8FF,
        BodyId::Mimas => 0xC0C0C0,
        BodyId::Iapetus => 0x696969,
        BodyId::Titania => 0x8B7355,
        BodyId::Oberon => 0x696969,
        BodyId::Ariel => 0xB8B8B8,
        BodyId::Umbriel => 0x505050,
        BodyId::Miranda => 0xA0A0A0,
        BodyId::Triton => 0xD3D3D3,
        BodyId::Ceres => 0x9A8F85,
        BodyId::Vesta => 0xB5A58C,
        BodyId::Pallas => 0x8F8F8F,
        BodyId::Hygiea => 0x5A5550,
    })
}

/// PBR parameters for a body surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub roughness: f32,
    pub metallic: f32,
    /// Emissive strength relative to the base colour.
    pub emissive: f32,
}

pub fn surface_style(id: BodyId) -> SurfaceStyle {
    let (roughness, metallic, emissive) = match id {
        BodyId::Sun => (1.0, 0.0, 3.0),
        BodyId::Mercury => (0.9, 0.1, 0.0),
        BodyId::Venus => (0.1, 0.0, 0.05),
        BodyId::Earth => (0.8, 0.0, 0.0),
        BodyId::Mars | BodyId::Moon => (0.9, 0.0, 0.0),
        BodyId::Jupiter | BodyId::Saturn => (0.8, 0.1, 0.0),
        BodyId::Uranus | BodyId::Neptune => (0.6, 0.2, 0.0),
        _ => (0.8, 0.2, 0.0),
    };
    SurfaceStyle {
        roughness,
        metallic,
        emissive,
    }
}

/// Bodies drawn with a faint atmospheric halo.
pub fn has_atmosphere_glow(id: BodyId) -> bool {
    matches!(
        id,
        BodyId::Venus | BodyId::Jupiter | BodyId::Saturn | BodyId::Uranus | BodyId::Neptune
    )
}

/// Fallback material for a body surface.
pub fn surface_material(id: BodyId) -> StandardMaterial {
    let color = fallback_color(id);
    let style = surface_style(id);
    StandardMaterial {
        base_color: color,
        perceptual_roughness: style.roughness,
        metallic: style.metallic,
        emissive: LinearRgba::from(color) * style.emissive,
        // The Sun is the light source; shading it from its own point light looks wrong
        unlit: id == BodyId::Sun,
        ..default()
    }
}

// === Pending loads ===

/// What a loaded image should be applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureTarget {
    Surface,
    /// Cloud shell, hidden until its texture arrives.
    Clouds(Entity),
    Rings,
}

#[derive(Debug)]
struct PendingTexture {
    path: String,
    image: Handle<Image>,
    material: Handle<StandardMaterial>,
    target: TextureTarget,
}

/// Outstanding texture loads plus running totals for the progress display.
#[derive(Resource, Default, Debug)]
pub struct TextureRequests {
    pending: Vec<PendingTexture>,
    requested: usize,
    loaded: usize,
    failed: usize,
}

impl TextureRequests {
    /// Start loading `path` and remember which material it should upgrade.
    pub fn request(
        &mut self,
        asset_server: &AssetServer,
        path: impl Into<String>,
        material: Handle<StandardMaterial>,
        target: TextureTarget,
    ) {
        let path = path.into();
        let image = asset_server.load(path.clone());
        self.pending.push(PendingTexture {
            path,
            image,
            material,
            target,
        });
        self.requested += 1;
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn resolved(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Share of requests that have resolved either way, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.requested == 0 {
            return 1.0;
        }
        self.resolved() as f32 / self.requested as f32
    }
}

/// Apply loaded images to their materials and drop failed requests.
fn poll_texture_loads(
    asset_server: Res<AssetServer>,
    mut requests: ResMut<TextureRequests>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visibility: Query<&mut Visibility>,
) {
    if requests.pending.is_empty() {
        return;
    }

    let pending = std::mem::take(&mut requests.pending);
    for request in pending {
        match asset_server.get_load_state(request.image.id()) {
            Some(LoadState::Loaded) => {
                if let Some(material) = materials.get_mut(&request.material) {
                    let alpha = material.base_color.alpha();
                    material.base_color = Color::WHITE.with_alpha(alpha);
                    material.base_color_texture = Some(request.image.clone());
                }
                if let TextureTarget::Clouds(entity) = request.target {
                    if let Ok(mut vis) = visibility.get_mut(entity) {
                        *vis = Visibility::Inherited;
                    }
                }
                debug!("Texture {} applied", request.path);
                requests.loaded += 1;
            }
            Some(LoadState::Failed(err)) => {
                debug!("Texture {} unavailable, keeping flat colour: {err}", request.path);
                requests.failed += 1;
            }
            _ => requests.pending.push(request),
        }
    }

    if requests.pending.is_empty() {
        info!(
            "Texture loading finished: {} applied, {} using fallback colours",
            requests.loaded, requests.failed
        );
    }
}
