#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_defaults_to_light_outside_a_browser() {
    assert!(!load());
}

#[test]
fn store_is_noop_but_callable() {
    store(true);
    store(false);
    assert!(!load());
}
