use super::*;

#[test]
fn theme_state_default_is_light_following_the_system() {
    let state = ThemeState::default();
    assert!(!state.dark);
    assert_eq!(state.preference, None);
    assert_eq!(state.preference_label(), "System");
}

#[test]
fn applied_scheme_tracks_the_dark_flag() {
    let dark = ThemeState {
        dark: true,
        preference: None,
    };
    assert_eq!(dark.applied_scheme(), ColorScheme::Dark);
    assert_eq!(ThemeState::default().applied_scheme(), ColorScheme::Light);
}

#[test]
fn preference_label_names_explicit_choices() {
    let light = ThemeState {
        dark: false,
        preference: Some(ColorScheme::Light),
    };
    let dark = ThemeState {
        dark: true,
        preference: Some(ColorScheme::Dark),
    };
    assert_eq!(light.preference_label(), "Light");
    assert_eq!(dark.preference_label(), "Dark");
}
