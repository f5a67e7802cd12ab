use super::common::labels;
use crate::workflows::styling::domain::TuckingPolicy;
use crate::workflows::styling::enrichment::resolve_tucking;

#[test]
fn base_and_top_layers_stay_optional() {
    assert_eq!(
        resolve_tucking("base_layer", &labels(&["T-shirt"]), 4),
        TuckingPolicy::Optional
    );
    assert_eq!(
        resolve_tucking("top_layer", &labels(&[]), 1),
        TuckingPolicy::Optional
    );
}

#[test]
fn shirt_under_three_or_more_layers_is_always_tucked() {
    assert_eq!(
        resolve_tucking("shirt_layer", &labels(&["Oxford"]), 3),
        TuckingPolicy::Always
    );
    assert_eq!(
        resolve_tucking("shirt_layer", &labels(&[]), 4),
        TuckingPolicy::Always
    );
}

#[test]
fn shirt_rule_beats_cardigan_rule() {
    // Role precedence: the slot is a shirt even if the allowed
    // subcategories would otherwise hit the never-tucked knit rule.
    assert_eq!(
        resolve_tucking("shirt_layer", &labels(&["Cardigan"]), 3),
        TuckingPolicy::Always
    );
}

#[test]
fn turtleneck_under_three_or_more_layers_is_always_tucked() {
    assert_eq!(
        resolve_tucking("turtleneck_layer", &labels(&["Turtleneck"]), 3),
        TuckingPolicy::Always
    );
}

#[test]
fn sweater_in_heavy_outfit_stays_optional() {
    // No weight data: a thin merino would tuck, a chunky knit would not.
    assert_eq!(
        resolve_tucking("mid_layer", &labels(&["Sweater"]), 3),
        TuckingPolicy::Optional
    );
}

#[test]
fn cardigans_and_blazers_are_never_tucked() {
    assert_eq!(
        resolve_tucking("outer_layer", &labels(&["Shawl Cardigan"]), 4),
        TuckingPolicy::Never
    );
    assert_eq!(
        resolve_tucking("mid_layer", &labels(&["Blazer"]), 2),
        TuckingPolicy::Never
    );
}

#[test]
fn outer_slots_default_to_never() {
    assert_eq!(
        resolve_tucking("outer_layer", &labels(&["Harrington", "Bomber"]), 3),
        TuckingPolicy::Never
    );
    assert_eq!(
        resolve_tucking("vest_layer", &labels(&[]), 3),
        TuckingPolicy::Never
    );
}

#[test]
fn mid_layer_sweater_in_light_outfit_is_optional() {
    // Two layers, so the heavy-layering sweater rule does not fire and the
    // outer-slot branch decides.
    assert_eq!(
        resolve_tucking("mid_layer", &labels(&["Sweater"]), 2),
        TuckingPolicy::Optional
    );
}

#[test]
fn polo_tucking_scales_with_layer_count() {
    assert_eq!(
        resolve_tucking("polo_layer", &labels(&[]), 2),
        TuckingPolicy::Optional
    );
    assert_eq!(
        resolve_tucking("polo_layer", &labels(&[]), 3),
        TuckingPolicy::Always
    );
}

#[test]
fn two_layer_shirt_is_optional() {
    assert_eq!(
        resolve_tucking("shirt_layer", &labels(&["Linen"]), 2),
        TuckingPolicy::Optional
    );
}

#[test]
fn unknown_slot_names_fall_through_to_optional() {
    assert_eq!(
        resolve_tucking("accessory_layer", &labels(&[]), 1),
        TuckingPolicy::Optional
    );
    assert_eq!(
        resolve_tucking("", &labels(&["Scarf"]), 5),
        TuckingPolicy::Optional
    );
}
