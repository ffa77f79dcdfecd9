//! View controller: one live session (camera, lights, packing group) at a time.
//!
//! Selecting a container never edits the current scene. The whole session is
//! despawned and a new one is spawned in its place, under a new generation.
//! Per-frame systems check the generation, so a superseded session's render
//! loop stops acting as soon as its successor exists.

use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::render::RendererResource;
use crate::scene::blocks::PackingRoot;
use crate::scene::import::LoadedResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Empty,
    Displaying(usize),
}

/// Request to display the packing at this index of the loaded result.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectContainer(pub usize);

/// Tags every entity spawned for a view session with that session's generation.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionMember(pub u64);

/// Carried by the session camera; the per-frame loop of that session.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderLoop {
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSettings {
    /// Light travels from here towards the origin.
    pub from: Vec3,
    pub illuminance: f32,
}

/// Fixed surroundings installed with every session.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ViewSettings {
    pub background: Color,
    pub camera_offset: Vec3,
    pub fov_degrees: f32,
    /// Far clip plane; covers the orbit camera's full zoom range.
    pub far_clip: f32,
    pub lights: [LightSettings; 2],
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            camera_offset: Vec3::new(300.0, 0.0, 0.0),
            fov_degrees: 75.0,
            far_clip: 20_000.0,
            lights: [
                LightSettings {
                    from: Vec3::new(400.0, 300.0, 200.0),
                    illuminance: 6_000.0,
                },
                LightSettings {
                    from: Vec3::new(-100.0, -200.0, -300.0),
                    illuminance: 2_500.0,
                },
            ],
        }
    }
}

/// The single owned view resource: what is displayed and which entities
/// belong to it.
#[derive(Resource, Default, Debug)]
pub struct ViewSession {
    state: ViewState,
    generation: u64,
    entities: Vec<Entity>,
}

impl ViewSession {
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// True while the session of `generation` is the one on screen.
    pub fn is_live(&self, generation: u64) -> bool {
        self.state != ViewState::Empty && generation == self.generation
    }

    /// Despawn everything the current session owns and go back to `Empty`.
    pub fn teardown(&mut self, commands: &mut Commands) {
        for entity in self.entities.drain(..) {
            commands.entity(entity).despawn_recursive();
        }
        self.state = ViewState::Empty;
    }

    fn begin(&mut self, index: usize) -> u64 {
        self.generation += 1;
        self.state = ViewState::Displaying(index);
        self.generation
    }
}

pub fn view_plugin(app: &mut App) {
    app.add_event::<SelectContainer>()
        .init_resource::<ViewSession>()
        .init_resource::<ViewSettings>()
        .init_resource::<LoadedResult>()
        .add_systems(Update, apply_selection);
}

/// Handles the latest valid `SelectContainer` of the frame with a full reset.
/// Unknown indices are skipped, so they never mask an earlier valid request.
#[allow(clippy::too_many_arguments)]
pub fn apply_selection(
    mut commands: Commands,
    mut events: EventReader<SelectContainer>,
    loaded: Res<LoadedResult>,
    renderer: Res<RendererResource>,
    settings: Res<ViewSettings>,
    mut session: ResMut<ViewSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut selected = None;
    for &SelectContainer(index) in events.read() {
        match loaded.groups.get(index) {
            Some(group) => selected = Some((index, group)),
            None => tracing::warn!(
                index,
                available = loaded.groups.len(),
                "ignoring selection of unknown container"
            ),
        }
    }
    let Some((index, group)) = selected else {
        return;
    };

    session.teardown(&mut commands);
    let generation = session.begin(index);

    commands.insert_resource(ClearColor(settings.background));
    let mut entities = spawn_view_rig(&mut commands, &settings, generation);

    let root = renderer
        .0
        .spawn_group(&mut commands, &mut meshes, &mut materials, group, generation);
    commands.entity(root).insert(PackingRoot { index });
    entities.push(root);
    session.entities = entities;

    tracing::info!(
        index,
        container = %group.name,
        blocks = group.blocks.len(),
        generation,
        "displaying container"
    );
}

/// Camera with orbit controls and the two directional lights.
fn spawn_view_rig(commands: &mut Commands, settings: &ViewSettings, generation: u64) -> Vec<Entity> {
    let orbit = OrbitCamera::from_offset(settings.camera_offset);
    let camera = commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: settings.fov_degrees.to_radians(),
                far: settings.far_clip,
                ..default()
            }),
            orbit.transform(),
            orbit,
            RenderLoop { generation },
            SessionMember(generation),
        ))
        .id();

    let mut entities = vec![camera];
    for light in &settings.lights {
        let entity = commands
            .spawn((
                DirectionalLight {
                    illuminance: light.illuminance,
                    ..default()
                },
                Transform::from_translation(light.from).looking_at(Vec3::ZERO, Vec3::Y),
                SessionMember(generation),
            ))
            .id();
        entities.push(entity);
    }
    entities
}
