use crate::character::MeshAssets;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Half extent of the square ground plane.
const GROUND_HALF_SIZE: f32 = 4_000.0;

/// Root of everything the world spawns; despawned with its scene.
#[derive(Component)]
pub struct WorldRoot;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GlobalAmbientLight {
            color: Color::WHITE,
            brightness: 300.0,
            affects_lightmapped_meshes: true,
        })
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.15)));
    }
}

/// Spawns the ground plane and the sun. Meshes are only attached when the
/// render asset stores exist.
pub fn spawn_world(
    commands: &mut Commands,
    assets: Option<MeshAssets<'_>>,
) -> Entity {
    info!("Spawning world ground and sun");

    let root = commands
        .spawn((WorldRoot, Transform::default(), Visibility::Visible))
        .id();

    let mut ground = commands.spawn((
        Name::new("Ground"),
        Transform::default(),
        Visibility::Inherited,
        ChildOf(root),
    ));
    if let Some((meshes, materials)) = assets {
        ground.insert((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(
                GROUND_HALF_SIZE * 2.0,
                GROUND_HALF_SIZE * 2.0,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.36, 0.33, 0.27),
                perceptual_roughness: 1.0,
                ..default()
            })),
        ));
    }

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(400.0, 1_000.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
        ChildOf(root),
    ));

    root
}
