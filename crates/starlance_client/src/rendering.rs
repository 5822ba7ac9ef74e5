use bevy::prelude::*;
use starlance_simulation::{CameraRig, ProjectilePool, Ship, POOL_CAPACITY};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_visuals_for_new_ships,
                spawn_view_cameras,
                sync_hull_transforms,
                sync_bolt_visuals,
                sync_view_cameras,
                draw_reference_grid,
            )
                .chain(),
        );
    }
}

/// Marker: simulation entity needs visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Bolt sphere mirroring one pool slot of a ship
#[derive(Component)]
pub struct BoltVisual {
    pub ship: Entity,
    pub slot: usize,
}

/// Link: render camera → camera rig it mirrors
#[derive(Component)]
pub struct ViewCamera(pub Entity);

/// Spawn hull + bolt visuals for new simulation ships
fn spawn_visuals_for_new_ships(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (With<Ship>, With<NeedsVisual>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform) in query.iter() {
        // Hull: a cone with its nose along +X, the rotation-zero forward
        let hull_mesh = Mesh::from(Cone {
            radius: 0.5,
            height: 1.5,
        })
        .rotated_by(Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2));

        commands.spawn((
            Mesh3d(meshes.add(hull_mesh)),
            MeshMaterial3d(materials.add(Color::WHITE)),
            *sim_transform,
            VisualOf(sim_entity),
        ));

        // One sphere per pool slot, hidden until its slot goes active
        let bolt_mesh = meshes.add(Sphere::new(0.1));
        let bolt_material = materials.add(Color::srgb(0.1, 0.9, 0.2));

        for slot in 0..POOL_CAPACITY {
            commands.spawn((
                Mesh3d(bolt_mesh.clone()),
                MeshMaterial3d(bolt_material.clone()),
                Transform::default(),
                Visibility::Hidden,
                BoltVisual {
                    ship: sim_entity,
                    slot,
                },
            ));
        }

        commands.entity(sim_entity).remove::<NeedsVisual>();
    }
}

/// Spawn a render camera for each new rig
fn spawn_view_cameras(mut commands: Commands, rigs: Query<(Entity, &CameraRig), Added<CameraRig>>) {
    for (rig_entity, rig) in rigs.iter() {
        commands.spawn((
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: rig.fov_deg.to_radians(),
                ..default()
            }),
            Transform::from_translation(rig.position).looking_at(rig.target, rig.up),
            ViewCamera(rig_entity),
        ));
    }
}

/// Mirror simulation transforms onto hull visuals
fn sync_hull_transforms(
    mut visuals: Query<(&VisualOf, &mut Transform)>,
    ships: Query<&Transform, (With<Ship>, Without<VisualOf>)>,
) {
    for (visual_of, mut transform) in visuals.iter_mut() {
        let Ok(sim_transform) = ships.get(visual_of.0) else {
            continue;
        };
        *transform = *sim_transform;
    }
}

/// Show active pool slots, hide the rest
fn sync_bolt_visuals(
    mut bolts: Query<(&BoltVisual, &mut Transform, &mut Visibility)>,
    pools: Query<&ProjectilePool>,
) {
    for (bolt, mut transform, mut visibility) in bolts.iter_mut() {
        let Ok(pool) = pools.get(bolt.ship) else {
            continue;
        };

        let slot = &pool.slots[bolt.slot];
        if slot.active {
            transform.translation = slot.position;
            *visibility = Visibility::Visible;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Apply the rig's view parameters to the render camera
fn sync_view_cameras(
    mut cameras: Query<(&ViewCamera, &mut Transform, &mut Projection)>,
    rigs: Query<&CameraRig>,
) {
    for (view, mut transform, mut projection) in cameras.iter_mut() {
        let Ok(rig) = rigs.get(view.0) else {
            continue;
        };

        *transform = Transform::from_translation(rig.position).looking_at(rig.target, rig.up);

        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = rig.fov_deg.to_radians();
        }
    }
}

/// World grid around the origin (32 cells, 1 unit spacing)
fn draw_reference_grid(mut gizmos: Gizmos) {
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        UVec2::splat(32),
        Vec2::splat(1.0),
        Color::srgb(0.25, 0.25, 0.25),
    );
}
