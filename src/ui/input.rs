//! Keyboard bindings

use bevy::prelude::*;

use crate::lifecycle::ActiveView;
use crate::sky::{SkyMode, SkyModePolicy, SkyModeSelected, SkySphere};

pub fn view_for_key(key: KeyCode) -> Option<ActiveView> {
    match key {
        KeyCode::Digit1 => Some(ActiveView::Orrery),
        KeyCode::Digit2 => Some(ActiveView::SkyGlobe),
        KeyCode::Digit3 => Some(ActiveView::StarMap),
        KeyCode::Escape => Some(ActiveView::Closed),
        _ => None,
    }
}

pub fn mode_for_key(key: KeyCode, current: SkyMode) -> Option<SkyMode> {
    match key {
        KeyCode::KeyD => Some(SkyMode::Dome),
        KeyCode::KeyG => Some(SkyMode::Globe),
        KeyCode::Tab => Some(current.toggled()),
        _ => None,
    }
}

/// Switching views unmounts the current one first (`OnExit` runs before `OnEnter`)
pub fn handle_view_keys(
    keys: Res<ButtonInput<KeyCode>>,
    current: Res<State<ActiveView>>,
    mut next: ResMut<NextState<ActiveView>>,
) {
    for key in keys.get_just_pressed() {
        let Some(view) = view_for_key(*key) else {
            continue;
        };
        if view != *current.get() {
            next.set(view);
        }
    }
}

pub fn handle_sky_mode_keys(
    keys: Res<ButtonInput<KeyCode>>,
    spheres: Query<&SkySphere>,
    mut selections: MessageWriter<SkyModeSelected>,
) {
    let Some(sphere) = spheres
        .iter()
        .find(|sphere| sphere.policy == SkyModePolicy::Explicit)
    else {
        return;
    };
    let mut current = sphere.mode;
    for key in keys.get_just_pressed() {
        if let Some(mode) = mode_for_key(*key, current) {
            selections.write(SkyModeSelected(mode));
            current = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_view_bindings() {
        assert_eq!(view_for_key(KeyCode::Digit1), Some(ActiveView::Orrery));
        assert_eq!(view_for_key(KeyCode::Digit2), Some(ActiveView::SkyGlobe));
        assert_eq!(view_for_key(KeyCode::Digit3), Some(ActiveView::StarMap));
        assert_eq!(view_for_key(KeyCode::Escape), Some(ActiveView::Closed));
        assert_eq!(view_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_mode_bindings() {
        assert_eq!(mode_for_key(KeyCode::KeyD, SkyMode::Globe), Some(SkyMode::Dome));
        assert_eq!(mode_for_key(KeyCode::KeyG, SkyMode::Dome), Some(SkyMode::Globe));
        assert_eq!(mode_for_key(KeyCode::Tab, SkyMode::Globe), Some(SkyMode::Dome));
        assert_eq!(mode_for_key(KeyCode::Tab, SkyMode::Dome), Some(SkyMode::Globe));
        assert_eq!(mode_for_key(KeyCode::Space, SkyMode::Dome), None);
    }

    #[test]
    fn test_digit_key_requests_view() {
        let mut world = World::new();
        world.insert_resource(State::new(ActiveView::Orrery));
        world.init_resource::<NextState<ActiveView>>();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Digit3);
        world.insert_resource(keys);

        world.run_system_once(handle_view_keys).expect("view keys");

        assert!(matches!(
            *world.resource::<NextState<ActiveView>>(),
            NextState::Pending(ActiveView::StarMap)
        ));
    }

    #[test]
    fn test_current_view_key_is_ignored() {
        let mut world = World::new();
        world.insert_resource(State::new(ActiveView::SkyGlobe));
        world.init_resource::<NextState<ActiveView>>();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Digit2);
        world.insert_resource(keys);

        world.run_system_once(handle_view_keys).expect("view keys");

        assert!(matches!(
            *world.resource::<NextState<ActiveView>>(),
            NextState::Unchanged
        ));
    }

    #[test]
    fn test_tab_toggles_star_map_mode() {
        let mut world = World::new();
        world.init_resource::<Messages<SkyModeSelected>>();
        world.spawn(SkySphere {
            policy: SkyModePolicy::Explicit,
            mode: SkyMode::Globe,
        });
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Tab);
        world.insert_resource(keys);

        world.run_system_once(handle_sky_mode_keys).expect("mode keys");

        let sent = world
            .run_system_once(|mut selections: MessageReader<SkyModeSelected>| {
                selections.read().copied().collect::<Vec<_>>()
            })
            .expect("read selections");
        assert_eq!(sent, vec![SkyModeSelected(SkyMode::Dome)]);
    }
}
