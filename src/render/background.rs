//! Background rendering for the solar system visualization.
//!
//! Provides the starfield (a catalog of bright stars at their real sky
//! positions plus random fainter filler) and scene lighting.

use bevy::prelude::*;
use rand::Rng;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<StarfieldSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

#[derive(Resource)]
pub struct StarfieldSettings {
    /// Radius of the sky sphere. Must stay inside the camera far plane.
    pub radius: f32,
    /// Number of random filler stars.
    pub filler_count: usize,
    /// World units per unit of catalog star size.
    pub star_scale: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            radius: 5000.0,
            filler_count: 3000,
            star_scale: 6.0,
        }
    }
}

/// A catalog star. Positions are J2000 equatorial coordinates.
#[derive(Clone, Copy, Debug)]
pub struct CatalogStar {
    pub name: &'static str,
    /// Right ascension in degrees.
    pub ra_deg: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
    pub spectral_class: &'static str,
}

const fn star(
    name: &'static str,
    ra_deg: f64,
    dec_deg: f64,
    magnitude: f64,
    spectral_class: &'static str,
) -> CatalogStar {
    CatalogStar {
        name,
        ra_deg,
        dec_deg,
        magnitude,
        spectral_class,
    }
}

/// The twenty brightest stars in the night sky.
pub static BRIGHT_STARS: [CatalogStar; 20] = [
    star("Sirius", 101.287, -16.716, -1.46, "A1V"),
    star("Canopus", 95.988, -52.696, -0.74, "A9II"),
    star("Arcturus", 213.915, 19.182, -0.05, "K1.5III"),
    star("Vega", 279.234, 38.784, 0.03, "A0V"),
    star("Capella", 79.172, 45.998, 0.08, "G5III"),
    star("Rigel", 78.634, -8.202, 0.13, "B8Iae"),
    star("Procyon", 114.825, 5.225, 0.34, "F5IV"),
    star("Betelgeuse", 88.793, 7.407, 0.50, "M1Ia"),
    star("Achernar", 24.605, -57.237, 0.46, "B6Vpe"),
    star("Hadar", 210.956, -60.374, 0.61, "B1III"),
    star("Altair", 297.696, 8.868, 0.77, "A7V"),
    star("Aldebaran", 68.980, 16.509, 0.85, "K5III"),
    star("Antares", 247.352, -26.432, 1.09, "M1.5Iab"),
    star("Spica", 201.298, -11.161, 1.04, "B1III"),
    star("Pollux", 116.329, 28.026, 1.14, "K0III"),
    star("Fomalhaut", 344.413, -29.622, 1.16, "A3V"),
    star("Deneb", 310.358, 45.280, 1.25, "A2Ia"),
    star("Regulus", 152.093, 11.967, 1.35, "B7V"),
    star("Castor", 113.649, 31.888, 1.57, "A1V"),
    star("Bellatrix", 81.283, 6.350, 1.64, "B2III"),
];

/// Map equatorial coordinates onto a sphere of `radius`, with the celestial
/// pole along +Y.
pub fn ra_dec_to_cartesian(ra_deg: f64, dec_deg: f64, radius: f64) -> Vec3 {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    Vec3::new(
        (radius * dec.cos() * ra.cos()) as f32,
        (radius * dec.sin()) as f32,
        (radius * dec.cos() * ra.sin()) as f32,
    )
}

/// Colour for a spectral class. Only the leading letter matters.
pub fn spectral_color(class: &str) -> Color {
    let rgb: u32 = match class.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('O') => 0x9BB0FF,
        Some('B') => 0xAABFFF,
        Some('A') => 0xCAD7FF,
        Some('F') => 0xF8F7FF,
        Some('G') => 0xFFF4EA,
        Some('K') => 0xFFD2A1,
        Some('M') => 0xFFAD51,
        _ => 0xFFFFFF,
    };
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Rendered size for an apparent magnitude; brighter stars are larger.
pub fn star_size(magnitude: f64) -> f32 {
    (3.0 - (magnitude + 1.5) * 0.6).clamp(0.5, 3.0) as f32
}

const SPECTRAL_CLASSES: [&str; 7] = ["O", "B", "A", "F", "G", "K", "M"];

/// Filler stars follow the galactic mix: mostly red dwarfs.
fn random_spectral_class(rng: &mut impl Rng) -> &'static str {
    let roll: f64 = rng.r#gen();
    match roll {
        r if r < 0.76 => "M",
        r if r < 0.88 => "K",
        r if r < 0.96 => "G",
        r if r < 0.99 => "F",
        r if r < 0.995 => "A",
        r if r < 0.999 => "B",
        _ => "O",
    }
}

// One unlit material per spectral class
fn class_material(materials: &mut Assets<StandardMaterial>, class: &str) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: spectral_color(class),
        unlit: true,
        ..default()
    })
}

/// Spawn catalog stars and random filler on the sky sphere.
fn spawn_starfield(
    mut commands: Commands,
    settings: Res<StarfieldSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    let palette: Vec<(&str, Handle<StandardMaterial>)> = SPECTRAL_CLASSES
        .iter()
        .map(|class| (*class, class_material(&mut materials, class)))
        .collect();
    let material_for = |class: &str| {
        palette
            .iter()
            .find(|(c, _)| class.starts_with(c))
            .map(|(_, m)| m.clone())
    };
    let fallback = class_material(&mut materials, "");

    let radius = settings.radius as f64;

    for catalog_star in &BRIGHT_STARS {
        let position = ra_dec_to_cartesian(catalog_star.ra_deg, catalog_star.dec_deg, radius);
        let size = star_size(catalog_star.magnitude) * settings.star_scale;
        commands.spawn((
            Name::new(catalog_star.name),
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(
                material_for(catalog_star.spectral_class).unwrap_or_else(|| fallback.clone()),
            ),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
        ));
    }

    let mut rng = rand::thread_rng();
    for _ in 0..settings.filler_count {
        let ra = rng.gen_range(0.0..360.0);
        let dec = rng.gen_range(-90.0..90.0);
        let magnitude = rng.gen_range(2.0..6.0);
        let class = random_spectral_class(&mut rng);
        let position = ra_dec_to_cartesian(ra, dec, radius);
        let size = star_size(magnitude) * settings.star_scale;
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(material_for(class).unwrap_or_else(|| fallback.clone())),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
        ));
    }

    info!(
        "Spawned {} catalog stars and {} background stars",
        BRIGHT_STARS.len(),
        settings.filler_count
    );
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // The Sun lights the system from the origin
    commands.spawn((
        Name::new("Sunlight"),
        PointLight {
            intensity: 1.0e10,
            range: 20_000.0,
            radius: 4.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    // Dim fill so night sides are not pitch black
    commands.spawn((
        Name::new("Fill light"),
        DirectionalLight {
            illuminance: 300.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
