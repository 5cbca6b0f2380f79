//! Controls plugin
//!
//! Start and Reset buttons in the lower left corner plus keyboard shortcuts
//! (Space or Enter to start, R to reset, Escape to quit). Both paths only emit
//! [`SimulationCommand`] events; the simulation plugin acts on them.

use crate::prelude::*;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};

const BUTTON_COLOR_NORMAL: Color = Color::srgba(1.0, 1.0, 1.0, 0.05);
const BUTTON_COLOR_HOVERED: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);
const BUTTON_COLOR_PRESSED: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);

#[derive(Component)]
pub struct StartButton;

#[derive(Component)]
pub struct ResetButton;

/// A button that maps to a single command
pub trait CommandButton {
    const LABEL: &'static str;

    fn command() -> SimulationCommand;
}

impl CommandButton for StartButton {
    const LABEL: &'static str = "Start";

    fn command() -> SimulationCommand {
        SimulationCommand::Start
    }
}

impl CommandButton for ResetButton {
    const LABEL: &'static str = "Reset";

    fn command() -> SimulationCommand {
        SimulationCommand::Reset
    }
}

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_controls_ui);

        app.add_systems(
            Update,
            (
                keyboard_input_handler,
                button_interaction_handler::<StartButton>,
                button_interaction_handler::<ResetButton>,
            ),
        );
    }
}

/// Handles keyboard input and emits SimulationCommand events
fn keyboard_input_handler(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut commands: EventWriter<SimulationCommand>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        match &event.logical_key {
            Key::Space | Key::Enter => {
                commands.write(SimulationCommand::Start);
            }
            Key::Character(c) if c.to_lowercase() == "r" => {
                commands.write(SimulationCommand::Reset);
            }
            Key::Escape => {
                commands.write(SimulationCommand::Quit);
            }
            _ => {}
        }
    }
}

/// Generic button interaction handler that emits SimulationCommand
fn button_interaction_handler<T: Component + CommandButton>(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<T>),
    >,
    mut command_writer: EventWriter<SimulationCommand>,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                *color = BackgroundColor(BUTTON_COLOR_PRESSED);
                command_writer.write(T::command());
            }
            Interaction::Hovered => {
                *color = BackgroundColor(BUTTON_COLOR_HOVERED);
            }
            Interaction::None => {
                *color = BackgroundColor(BUTTON_COLOR_NORMAL);
            }
        }
    }
}

fn setup_controls_ui(mut commands: Commands, config: Res<SimulationConfig>) {
    let ui = &config.ui;

    commands
        .spawn((
            Name::new("Controls"),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(ui.button_margin),
                left: Val::Px(ui.button_margin),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(ui.button_gap),
                ..default()
            },
        ))
        .with_children(|parent| {
            spawn_button::<StartButton>(parent, StartButton, ui);
            spawn_button::<ResetButton>(parent, ResetButton, ui);
        });
}

fn spawn_button<T: Component + CommandButton>(
    parent: &mut ChildSpawnerCommands<'_>,
    marker: T,
    ui: &UiConfig,
) {
    parent
        .spawn((
            Button,
            marker,
            Node {
                width: Val::Px(ui.button_width),
                padding: UiRect::all(Val::Px(ui.button_padding)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(Color::WHITE),
            BorderRadius::all(Val::Px(ui.button_border_radius)),
            BackgroundColor(BUTTON_COLOR_NORMAL),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(T::LABEL),
                TextFont {
                    font_size: ui.font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    fn written_commands(app: &App) -> Vec<SimulationCommand> {
        let events = app.world().resource::<Events<SimulationCommand>>();
        events.iter_current_update_events().copied().collect()
    }

    fn key_event(logical_key: Key, key_code: KeyCode, state: ButtonState) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key,
            state,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn test_keyboard_maps_to_commands() {
        let cases = [
            (Key::Space, KeyCode::Space, SimulationCommand::Start),
            (Key::Enter, KeyCode::Enter, SimulationCommand::Start),
            (Key::Character("r".into()), KeyCode::KeyR, SimulationCommand::Reset),
            (Key::Character("R".into()), KeyCode::KeyR, SimulationCommand::Reset),
            (Key::Escape, KeyCode::Escape, SimulationCommand::Quit),
        ];

        for (logical_key, key_code, expected) in cases {
            let mut app = create_test_app();
            app.add_systems(Update, keyboard_input_handler);

            app.world_mut()
                .send_event(key_event(logical_key, key_code, ButtonState::Pressed));
            app.update();

            assert_eq!(written_commands(&app), vec![expected], "key {key_code:?}");
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = create_test_app();
        app.add_systems(Update, keyboard_input_handler);

        app.world_mut()
            .send_event(key_event(Key::Space, KeyCode::Space, ButtonState::Released));
        app.update();

        assert!(written_commands(&app).is_empty());
    }

    #[test]
    fn test_pressed_button_emits_its_command() {
        let mut app = create_test_app();
        app.add_systems(Update, button_interaction_handler::<ResetButton>);
        app.world_mut().spawn((
            ResetButton,
            Interaction::Pressed,
            BackgroundColor(BUTTON_COLOR_NORMAL),
        ));

        app.update();

        assert_eq!(written_commands(&app), vec![SimulationCommand::Reset]);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(StartButton::LABEL, "Start");
        assert_eq!(ResetButton::command(), SimulationCommand::Reset);
    }
}
