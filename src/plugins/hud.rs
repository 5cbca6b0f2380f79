//! Orbit HUD (Heads-Up Display) module.
//!
//! Overlays the latest presented frame as text: the satellite position
//! readout, simulated time, altitude above the drawn central body, speed, and
//! specific orbital energy. The readout is refreshed only when the
//! [`OrbitView`] changes, i.e. after a reset or a completed tick.
//!
//! The attribution line with version and build date sits in the lower right
//! corner.

use crate::physics::gravity::specific_orbital_energy;
use crate::prelude::*;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct PositionTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct ElapsedTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct AltitudeTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct SpeedTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct EnergyTextNode;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct StatusTextNode;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_hud, spawn_attribution));
        app.add_systems(Update, (update_readout, update_status));
    }
}

/// Text shown for the satellite's position, two decimals per axis
pub fn format_position(position: Vector) -> String {
    format!(
        "Satellite position: ({:.2}, {:.2}) m",
        position.x, position.y
    )
}

/// Formats simulated seconds as `HH:MM:SS`, with days once past 24 hours
pub fn format_elapsed(seconds: Scalar) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "-".to_string();
    }

    let total = seconds.floor() as u64;
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, minutes, secs) = (rest / 3600, (rest % 3600) / 60, rest % 60);
    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}

fn spawn_hud(mut commands: Commands, config: Res<SimulationConfig>) {
    let ui = &config.ui;
    let text_font = TextFont::from_font_size(ui.font_size);
    let label_color = TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6));

    let hud_node = Node {
        position_type: PositionType::Absolute,
        top: Val::Px(ui.button_margin),
        left: Val::Px(ui.button_margin),
        padding: UiRect::all(Val::Px(ui.button_padding)),
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(1.0),
        ..default()
    };
    let hud_row_node = Node {
        display: Display::Flex,
        justify_content: JustifyContent::SpaceBetween,
        column_gap: Val::Px(20.0),
        ..default()
    };

    commands.spawn((
        Name::new("Orbit HUD"),
        hud_node,
        BorderRadius::all(Val::Px(ui.button_border_radius)),
        BackgroundColor(Color::srgba(0.2, 0.2, 0.2, 0.7)),
        children![
            (PositionTextNode, Text::new("-"), text_font.clone()),
            (
                hud_row_node.clone(),
                children![
                    (Text::new("Elapsed"), text_font.clone(), label_color),
                    (ElapsedTextNode, Text::new("-"), text_font.clone()),
                ],
            ),
            (
                hud_row_node.clone(),
                children![
                    (Text::new("Altitude"), text_font.clone(), label_color),
                    (AltitudeTextNode, Text::new("-"), text_font.clone()),
                ],
            ),
            (
                hud_row_node.clone(),
                children![
                    (Text::new("Speed"), text_font.clone(), label_color),
                    (SpeedTextNode, Text::new("-"), text_font.clone()),
                ],
            ),
            (
                hud_row_node.clone(),
                children![
                    (Text::new("Energy"), text_font.clone(), label_color),
                    (EnergyTextNode, Text::new("-"), text_font.clone()),
                ],
            ),
            (
                hud_row_node,
                children![
                    (Text::new("Status"), text_font.clone(), label_color),
                    (StatusTextNode, Text::new("-"), text_font),
                ],
            ),
        ],
    ));
}

fn spawn_attribution(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(5.0),
            right: Val::Px(5.0),
            padding: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        Text::new(format!(
            "Orbitdrift v{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("BUILD_DATE")
        )),
        TextFont::from_font_size(10.0),
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
    ));
}

fn update_readout(
    view: Res<OrbitView>,
    config: Res<SimulationConfig>,
    mut texts: ParamSet<(
        Single<&mut Text, With<PositionTextNode>>,
        Single<&mut Text, With<ElapsedTextNode>>,
        Single<&mut Text, With<AltitudeTextNode>>,
        Single<&mut Text, With<SpeedTextNode>>,
        Single<&mut Text, With<EnergyTextNode>>,
    )>,
) {
    if !view.is_changed() {
        return;
    }

    let physics = &config.physics;
    let mu = physics.gravitational_constant * physics.central_mass;
    let altitude = view.position.length() - config.rendering.central_body_radius;
    let energy = specific_orbital_energy(view.position, view.velocity, mu);

    texts.p0().0 = format_position(view.position);
    texts.p1().0 = format_elapsed(view.elapsed);
    texts.p2().0 = format!("{:.1} km", altitude / 1000.0);
    texts.p3().0 = format!("{:.1} m/s", view.velocity.length());
    texts.p4().0 = format!("{:.4e} J/kg", energy);
}

fn update_status(simulation: Res<Simulation>, mut status: Single<&mut Text, With<StatusTextNode>>) {
    if !simulation.is_changed() {
        return;
    }

    status.0 = if simulation.has_diverged() {
        "Diverged".to_string()
    } else if simulation.is_running() {
        format!("Running ({})", simulation.integrator().name())
    } else {
        "Idle".to_string()
    };
}
