//! On-screen view title, key hints and sky mode label

use bevy::prelude::*;

use crate::lifecycle::{ActiveView, MountScoped};
use crate::sky::{SkyMode, SkySphere};

#[derive(Component)]
pub struct ModeLabel;

pub fn mode_label_text(mode: SkyMode) -> String {
    format!("Mode: {}", mode.label())
}

pub fn key_hints(view: ActiveView) -> &'static str {
    match view {
        ActiveView::StarMap => "[1] Orrery  [2] Sky Globe  [3] Star Map  [D] Dome  [G] Globe  [Tab] Toggle  [Esc] Quit",
        _ => "[1] Orrery  [2] Sky Globe  [3] Star Map  [Esc] Quit",
    }
}

pub fn spawn_hud(mut commands: Commands, view: Res<State<ActiveView>>, spheres: Query<&SkySphere>) {
    let view = *view.get();
    let mode = spheres.iter().next().map(|sphere| sphere.mode);

    let hud = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            MountScoped,
            Name::new("HUD"),
        ))
        .id();

    commands.spawn((
        Text::new(view.title()),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        ChildOf(hud),
    ));
    commands.spawn((
        Text::new(key_hints(view)),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.75)),
        ChildOf(hud),
    ));
    if let Some(mode) = mode {
        commands.spawn((
            Text::new(mode_label_text(mode)),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            ModeLabel,
            ChildOf(hud),
        ));
    }
}

pub fn update_mode_label(
    spheres: Query<&SkySphere, Changed<SkySphere>>,
    mut labels: Query<&mut Text, With<ModeLabel>>,
) {
    let Some(sphere) = spheres.iter().next() else {
        return;
    };
    for mut text in &mut labels {
        text.0 = mode_label_text(sphere.mode);
    }
}
