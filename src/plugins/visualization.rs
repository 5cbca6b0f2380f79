//! Visualization plugin - Self-contained plugin pattern
//!
//! This plugin draws the latest [`OrbitView`] frame: the central body as a
//! filled disc at the origin, the satellite as a marker, and the trail as a
//! polyline from oldest to newest point. Positions are in meters and are
//! scaled to pixels by `rendering.meters_to_pixels`; the origin sits at the
//! center of the window with +y up.

use crate::physics::math::to_screen;
use crate::prelude::*;

/// Marker for the satellite's on-screen disc
#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
pub struct SatelliteMarker;

/// Marker for the central body's on-screen disc
#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
pub struct CentralBody;

/// Colors parsed once from the rendering config
#[derive(Resource, Copy, Clone, PartialEq, Debug)]
pub struct OrbitPalette {
    pub central_body: Color,
    pub satellite: Color,
    pub trail: Color,
}

impl OrbitPalette {
    pub fn from_config(rendering: &RenderingConfig) -> Self {
        Self {
            central_body: rendering.central_body_color(),
            satellite: rendering.satellite_color(),
            trail: rendering.trail_color(),
        }
    }
}

const CENTRAL_BODY_Z: f32 = 0.0;
const SATELLITE_Z: f32 = 1.0;

/// Plugin that renders the orbit
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                resolve_palette,
                (
                    spawn_camera,
                    spawn_central_body,
                    spawn_satellite_marker,
                    configure_gizmos,
                ),
            )
                .chain(),
        );
        app.add_systems(Update, (sync_satellite_marker, draw_trail));
    }
}

fn resolve_palette(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.insert_resource(OrbitPalette::from_config(&config.rendering));
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Camera2d,
        Msaa::Sample4,
    ));
}

fn spawn_central_body(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SimulationConfig>,
    palette: Res<OrbitPalette>,
) {
    let rendering = &config.rendering;
    let radius = (rendering.central_body_radius * rendering.meters_to_pixels) as f32;

    commands.spawn((
        Name::new("Central Body"),
        CentralBody,
        Mesh2d(meshes.add(Circle::new(radius))),
        MeshMaterial2d(materials.add(palette.central_body)),
        Transform::from_xyz(0.0, 0.0, CENTRAL_BODY_Z),
    ));
}

fn spawn_satellite_marker(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SimulationConfig>,
    palette: Res<OrbitPalette>,
    view: Res<OrbitView>,
) {
    let rendering = &config.rendering;
    let screen = to_screen(view.position, rendering.meters_to_pixels);

    commands.spawn((
        Name::new("Satellite"),
        SatelliteMarker,
        Mesh2d(meshes.add(Circle::new(rendering.satellite_marker_radius))),
        MeshMaterial2d(materials.add(palette.satellite)),
        Transform::from_translation(screen.extend(SATELLITE_Z)),
    ));
}

fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>, config: Res<SimulationConfig>) {
    let (gizmo_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line.width = config.rendering.trail_line_width;
}

/// Moves the marker to the latest presented position
fn sync_satellite_marker(
    view: Res<OrbitView>,
    config: Res<SimulationConfig>,
    mut markers: Query<&mut Transform, With<SatelliteMarker>>,
) {
    if !view.is_changed() {
        return;
    }

    let screen = to_screen(view.position, config.rendering.meters_to_pixels);
    if !screen.is_finite() {
        return;
    }

    for mut transform in &mut markers {
        transform.translation = screen.extend(SATELLITE_Z);
    }
}

/// Gizmos are immediate mode, so the trail is redrawn every frame
fn draw_trail(
    mut gizmos: Gizmos,
    view: Res<OrbitView>,
    config: Res<SimulationConfig>,
    palette: Res<OrbitPalette>,
) {
    if view.trail.len() < 2 {
        return;
    }

    gizmos.linestrip_2d(
        trail_screen_points(&view.trail, config.rendering.meters_to_pixels),
        palette.trail,
    );
}

/// Screen-space trail points, oldest first; non-finite points are dropped
pub fn trail_screen_points(trail: &[Vector], meters_to_pixels: Scalar) -> Vec<Vec2> {
    trail
        .iter()
        .map(|&point| to_screen(point, meters_to_pixels))
        .filter(|point| point.is_finite())
        .collect()
}
