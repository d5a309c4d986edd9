#![cfg(not(feature = "hydrate"))]

use appearance::ColorScheme;

use super::*;

#[test]
fn resolve_and_apply_is_light_in_non_hydrate_tests() {
    assert!(!resolve_and_apply());
}

#[test]
fn preference_writes_are_inert_without_a_browser() {
    set_preference(ColorScheme::Dark);
    assert_eq!(stored_preference(), None);

    clear_preference();
    assert_eq!(stored_preference(), None);
}

#[test]
fn boot_script_uses_the_shared_constants() {
    assert!(BOOT_SCRIPT.contains(STORAGE_KEY));
    assert!(BOOT_SCRIPT.contains(SYSTEM_DARK_QUERY));
    assert!(BOOT_SCRIPT.contains(&format!("classList.add('{DARK_CLASS}')")));
    assert!(BOOT_SCRIPT.contains(&format!("classList.remove('{DARK_CLASS}')")));
}

#[test]
fn boot_script_reads_and_writes_one_key() {
    // The bootstrap both probes and reads the preference under the same key
    // the Rust side writes.
    assert!(BOOT_SCRIPT.contains(&format!("localStorage.getItem('{STORAGE_KEY}')")));
    assert!(BOOT_SCRIPT.contains(&format!("'{STORAGE_KEY}' in localStorage")));
}
