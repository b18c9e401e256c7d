//! Main asteroid belt between Mars and Jupiter.
//!
//! Particles are generated once in AU and merged into a single vertex-coloured
//! mesh of tiny octahedra. The mesh is rebuilt when the scale mode changes so
//! the belt stays between the mapped orbits of Mars and Jupiter. The named
//! belt bodies (Ceres, Vesta, Pallas, Hygiea) are regular registry bodies and
//! orbit through kinematics like everything else.

use std::f64::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{BeltTuning, ScaleTuning};
use crate::scaling;
use crate::types::{FrameSet, ScaleMode, SimulationState};

/// World size of a particle of size class 1.0.
const PARTICLE_SCALE: f32 = 0.5;

/// Plugin providing the asteroid belt.
pub struct BeltPlugin;

impl Plugin for BeltPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BeltTuning>()
            .add_systems(Startup, spawn_belt)
            .add_systems(Update, (relayout_belt, rotate_belt).in_set(FrameSet::Visuals));
    }
}

/// Composition classes of belt asteroids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsteroidClass {
    /// Carbonaceous, dark.
    C,
    /// Silicaceous, tan.
    S,
    /// Metallic, bright.
    M,
}

/// One belt particle in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltParticle {
    pub radius_au: f64,
    pub angle: f64,
    pub height_au: f64,
    pub class: AsteroidClass,
    pub color: [f32; 3],
    pub size: f32,
}

fn roll_class(rng: &mut impl Rng) -> (AsteroidClass, [f32; 3]) {
    let roll: f64 = rng.r#gen();
    if roll < 0.75 {
        let c = [
            rng.gen_range(0.2..0.3),
            rng.gen_range(0.2..0.3),
            rng.gen_range(0.2..0.3),
        ];
        (AsteroidClass::C, c)
    } else if roll < 0.92 {
        let c = [
            rng.gen_range(0.7..0.9),
            rng.gen_range(0.6..0.8),
            rng.gen_range(0.4..0.5),
        ];
        (AsteroidClass::S, c)
    } else {
        let c = [
            rng.gen_range(0.8..1.0),
            rng.gen_range(0.8..1.0),
            rng.gen_range(0.8..1.0),
        ];
        (AsteroidClass::M, c)
    }
}

// Few large bodies, many small ones
fn roll_size(rng: &mut impl Rng) -> f32 {
    let roll: f64 = rng.r#gen();
    if roll < 0.8 {
        rng.gen_range(0.02..0.1)
    } else if roll < 0.95 {
        rng.gen_range(0.1..0.3)
    } else {
        rng.gen_range(0.3..1.0)
    }
}

/// Generate belt particles uniformly over the configured annulus.
pub fn generate_belt(tuning: &BeltTuning, rng: &mut impl Rng) -> Vec<BeltParticle> {
    let inner = tuning.inner_au.min(tuning.outer_au);
    let outer = tuning.inner_au.max(tuning.outer_au);
    let half = tuning.half_thickness_au.abs();

    (0..tuning.particle_count)
        .map(|_| {
            let radius_au = if outer > inner {
                rng.gen_range(inner..outer)
            } else {
                inner
            };
            let angle = rng.gen_range(0.0..TAU);
            let height_au = if half > 0.0 {
                rng.gen_range(-half..half)
            } else {
                0.0
            };
            let (class, color) = roll_class(rng);
            BeltParticle {
                radius_au,
                angle,
                height_au,
                class,
                color,
                size: roll_size(rng),
            }
        })
        .collect()
}

/// Render-space position of a particle. Height is scaled by the same ratio as
/// the radius so the belt keeps its proportions in every mode.
pub fn particle_position(tuning: &ScaleTuning, mode: ScaleMode, particle: &BeltParticle) -> Vec3 {
    let r = scaling::render_distance(tuning, mode, Some(particle.radius_au));
    let ratio = if particle.radius_au > 0.0 {
        r / particle.radius_au
    } else {
        0.0
    };
    Vec3::new(
        (particle.angle.cos() * r) as f32,
        (particle.height_au * ratio) as f32,
        (particle.angle.sin() * r) as f32,
    )
}

const OCTAHEDRON: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [4, 2, 1],
    [1, 2, 5],
    [5, 2, 0],
    [4, 3, 0],
    [1, 3, 4],
    [5, 3, 1],
    [0, 3, 5],
];

/// Merge every particle into one mesh with per-vertex colours.
pub fn build_belt_mesh(tuning: &ScaleTuning, mode: ScaleMode, particles: &[BeltParticle]) -> Mesh {
    let mut positions = Vec::with_capacity(particles.len() * OCTAHEDRON.len());
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut colors = Vec::with_capacity(positions.capacity());
    let mut indices = Vec::with_capacity(particles.len() * OCTAHEDRON_FACES.len() * 3);

    for particle in particles {
        let center = particle_position(tuning, mode, particle);
        let radius = particle.size * PARTICLE_SCALE;
        let base = positions.len() as u32;
        let [r, g, b] = particle.color;

        for corner in OCTAHEDRON {
            let dir = Vec3::from(corner);
            positions.push((center + dir * radius).to_array());
            normals.push(corner);
            colors.push([r, g, b, 1.0]);
        }
        for face in OCTAHEDRON_FACES {
            indices.extend(face.iter().map(|i| base + i));
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

/// The belt entity and the data it was built from.
#[derive(Component)]
pub struct AsteroidBelt {
    pub particles: Vec<BeltParticle>,
    pub laid_out_for: ScaleMode,
}

fn spawn_belt(
    mut commands: Commands,
    belt: Res<BeltTuning>,
    scale: Res<ScaleTuning>,
    sim: Res<SimulationState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = match belt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let particles = generate_belt(&belt, &mut rng);
    let mesh = meshes.add(build_belt_mesh(&scale, sim.scale_mode, &particles));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 1.0,
        ..default()
    });

    info!(
        "Spawned asteroid belt with {} particles ({:.1}-{:.1} AU)",
        particles.len(),
        belt.inner_au,
        belt.outer_au
    );

    commands.spawn((
        Name::new("Asteroid belt"),
        AsteroidBelt {
            particles,
            laid_out_for: sim.scale_mode,
        },
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
    ));
}

/// Rebuild the belt mesh after a scale-mode change.
fn relayout_belt(
    sim: Res<SimulationState>,
    scale: Res<ScaleTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut belts: Query<(&mut AsteroidBelt, &Mesh3d)>,
) {
    for (mut belt, mesh) in belts.iter_mut() {
        if belt.laid_out_for == sim.scale_mode {
            continue;
        }
        if let Some(existing) = meshes.get_mut(&mesh.0) {
            *existing = build_belt_mesh(&scale, sim.scale_mode, &belt.particles);
        }
        belt.laid_out_for = sim.scale_mode;
        debug!("Asteroid belt relaid out for {:?} scale", sim.scale_mode);
    }
}

/// Slow wall-clock rotation, independent of simulated time.
fn rotate_belt(
    belt: Res<BeltTuning>,
    real_time: Res<Time<Real>>,
    mut belts: Query<&mut Transform, With<AsteroidBelt>>,
) {
    let angle = real_time.elapsed_secs() * belt.spin_rate;
    for mut transform in belts.iter_mut() {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seeded(count: usize) -> (BeltTuning, Vec<BeltParticle>) {
        let tuning = BeltTuning {
            particle_count: count,
            ..default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_belt(&tuning, &mut rng);
        (tuning, particles)
    }

    #[test]
    fn particles_stay_inside_bounds() {
        let (tuning, particles) = seeded(2000);
        assert_eq!(particles.len(), 2000);
        for p in &particles {
            assert!(p.radius_au >= tuning.inner_au && p.radius_au <= tuning.outer_au);
            assert!(p.height_au.abs() <= tuning.half_thickness_au);
            assert!(p.size >= 0.02 && p.size <= 1.0);
            assert!(p.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn dark_carbonaceous_asteroids_dominate() {
        let (_, particles) = seeded(5000);
        let count = |class| particles.iter().filter(|p| p.class == class).count() as f64;
        let n = particles.len() as f64;
        assert!((count(AsteroidClass::C) / n - 0.75).abs() < 0.03);
        assert!((count(AsteroidClass::S) / n - 0.17).abs() < 0.03);
        assert!((count(AsteroidClass::M) / n - 0.08).abs() < 0.03);
    }

    #[test]
    fn same_seed_same_belt() {
        let (_, a) = seeded(100);
        let (_, b) = seeded(100);
        assert_eq!(a, b);
    }

    #[test]
    fn belt_sits_between_mars_and_jupiter() {
        let scale = ScaleTuning::default();
        let (_, particles) = seeded(500);
        for mode in ScaleMode::ALL {
            let mars = scaling::render_distance(&scale, mode, Some(1.52)) as f32;
            let jupiter = scaling::render_distance(&scale, mode, Some(5.2)) as f32;
            for p in &particles {
                let pos = particle_position(&scale, mode, p);
                let r = Vec2::new(pos.x, pos.z).length();
                assert!(r > mars && r < jupiter, "{mode:?}: {r} outside ({mars}, {jupiter})");
            }
        }
    }

    #[test]
    fn visible_mode_maps_linearly() {
        let scale = ScaleTuning::default();
        let p = BeltParticle {
            radius_au: 2.5,
            angle: 0.0,
            height_au: 0.1,
            class: AsteroidClass::C,
            color: [0.25; 3],
            size: 0.05,
        };
        let pos = particle_position(&scale, ScaleMode::Visible, &p);
        assert_relative_eq!(pos.x, 125.0, epsilon = 1e-3);
        assert_relative_eq!(pos.y, 5.0, epsilon = 1e-3);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn mesh_has_one_octahedron_per_particle() {
        let (_, particles) = seeded(10);
        let mesh = build_belt_mesh(&ScaleTuning::default(), ScaleMode::Visible, &particles);
        assert_eq!(mesh.count_vertices(), 60);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(240));
    }
}
