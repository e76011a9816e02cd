//! Scene bootstrap: the asset readiness gate and the one spawn pass.

use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_rapier3d::prelude::*;

use crate::camera::FollowCam;
use crate::config::{BallConfig, SceneConfig};
use crate::player::Player;

/// Ambient brightness when the configured light intensity is 1.0.
const AMBIENT_FULL_BRIGHTNESS: f32 = 1_000.0;

/// Directional fill illuminance when the configured light intensity is 1.0.
const DIRECTIONAL_FULL_ILLUMINANCE: f32 = 10_000.0;

/// Half-thickness of the cuboid collider under the ground plane.
const GROUND_COLLIDER_HALF_HEIGHT: f32 = 0.01;

/// Scene lifecycle: textures first, then the world.
///
/// Nothing spawns until every requested texture has reached a terminal load
/// state. This is a one-shot gate, not an ongoing loading screen.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    #[default]
    Loading,
    Running,
}

/// Texture handles requested at startup and resolved by the readiness gate.
///
/// Handles that fail to load are swapped for a generated placeholder before
/// the gate opens, so the spawn pass never sees a broken handle.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneTextures {
    pub player_ball: Handle<Image>,
    pub prop_ball: Handle<Image>,
    pub ground: Handle<Image>,
    pub sky: Handle<Image>,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneState>()
            .add_systems(Startup, request_textures)
            .add_systems(
                Update,
                wait_for_textures.run_if(in_state(SceneState::Loading)),
            )
            .add_systems(OnEnter(SceneState::Running), spawn_scene);
    }
}

fn request_textures(
    mut commands: Commands,
    server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    commands.insert_resource(SceneTextures {
        player_ball: server.load(config.player_ball.texture.clone()),
        prop_ball: server.load(config.prop_ball.texture.clone()),
        ground: server.load(config.ground.texture.clone()),
        sky: server.load(config.skybox.texture.clone()),
    });
}

/// Polls the asset server until every scene texture is loaded or failed,
/// substitutes the placeholder for failures, then opens the gate.
fn wait_for_textures(
    server: Res<AssetServer>,
    mut textures: ResMut<SceneTextures>,
    mut images: ResMut<Assets<Image>>,
    mut next: ResMut<NextState<SceneState>>,
) {
    let requested = [
        textures.player_ball.clone(),
        textures.prop_ball.clone(),
        textures.ground.clone(),
        textures.sky.clone(),
    ];

    let mut any_pending = false;
    let mut any_failed = false;
    for handle in &requested {
        match server.load_state(handle.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => {
                warn!("texture {:?} failed to load: {err}", handle.path());
                any_failed = true;
            }
            _ => any_pending = true,
        }
    }
    if any_pending {
        return;
    }

    if any_failed {
        let placeholder = images.add(placeholder_texture());
        let textures = &mut *textures;
        for handle in [
            &mut textures.player_ball,
            &mut textures.prop_ball,
            &mut textures.ground,
            &mut textures.sky,
        ] {
            if matches!(server.load_state(handle.id()), LoadState::Failed(_)) {
                *handle = placeholder.clone();
            }
        }
    }

    info!("textures resolved, spawning scene");
    next.set(SceneState::Running);
}

/// A simulated ball: render mesh plus the full rigid-body descriptor.
#[derive(Bundle)]
struct BallBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    rigid_body: RigidBody,
    collider: Collider,
    mass: ColliderMassProperties,
    restitution: Restitution,
    friction: Friction,
}

impl BallBundle {
    fn new(
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
        config: &BallConfig,
    ) -> Self {
        Self {
            mesh: Mesh3d(mesh),
            material: MeshMaterial3d(material),
            transform: Transform::from_translation(Vec3::from_array(config.position)),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::ball(config.radius),
            mass: ColliderMassProperties::Mass(config.mass),
            restitution: Restitution::coefficient(config.restitution),
            friction: Friction::coefficient(config.friction),
        }
    }
}

fn ball_mesh(config: &BallConfig) -> Mesh {
    let stacks = config.segments.max(2);
    Sphere::new(config.radius).mesh().uv(stacks * 2, stacks)
}

/// Spawns the whole scene in one pass once the gate is open. Body
/// descriptors are written here and nowhere else.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<SceneTextures>,
    config: Res<SceneConfig>,
) {
    // Hemispheric-style lighting: an ambient base plus one directional fill,
    // both scaled by the configured intensity.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.light.intensity * AMBIENT_FULL_BRIGHTNESS,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: config.light.intensity * DIRECTIONAL_FULL_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Sky cube: unlit, visible from the inside, no physics body.
    let sky = config.skybox.size;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(sky, sky, sky))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.sky.clone()),
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
    ));

    // The keyboard-driven ball.
    commands.spawn((
        BallBundle::new(
            meshes.add(ball_mesh(&config.player_ball)),
            materials.add(StandardMaterial {
                base_color_texture: Some(textures.player_ball.clone()),
                ..default()
            }),
            &config.player_ball,
        ),
        Player,
    ));

    // The inert prop ball.
    commands.spawn(BallBundle::new(
        meshes.add(ball_mesh(&config.prop_ball)),
        materials.add(StandardMaterial {
            base_color_texture: Some(textures.prop_ball.clone()),
            ..default()
        }),
        &config.prop_ball,
    ));

    // Ground: a textured plane over a fixed, zero-mass body.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(config.ground.width, config.ground.depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.ground.clone()),
            ..default()
        })),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(
            config.ground.width / 2.0,
            GROUND_COLLIDER_HALF_HEIGHT,
            config.ground.depth / 2.0,
        ),
        Restitution::coefficient(config.ground.restitution),
    ));

    // Camera: starts high over the origin, then trails the player ball.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 60.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCam::new(config.camera),
    ));

    // Controls hint
    commands.spawn((
        Text::new("WASD shoves the ball, space hops it"),
        Node {
            position_type: PositionType::Absolute,
            top: px(12.),
            left: px(12.),
            ..default()
        },
    ));

    info!(
        "scene ready: 2 balls on a {}x{} ground",
        config.ground.width, config.ground.depth
    );
}

/// 8x8 two-tone checker used wherever a texture fails to resolve.
fn placeholder_texture() -> Image {
    const SIZE: usize = 8;

    let mut data = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let lit = (x + y) % 2 == 0;
            let texel: &[u8] = if lit {
                &[235, 110, 190, 255]
            } else {
                &[38, 38, 46, 255]
            };
            data.extend_from_slice(texel);
        }
    }

    Image::new(
        Extent3d {
            width: SIZE as u32,
            height: SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
