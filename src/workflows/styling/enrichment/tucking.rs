use crate::workflows::styling::domain::{GarmentTag, SlotRole, TuckingPolicy};

/// Inputs shared by every tucking rule.
struct TuckingContext<'a> {
    role: SlotRole,
    subcategories: &'a [String],
    layer_count: u32,
}

type TuckingRule = fn(&TuckingContext<'_>) -> Option<TuckingPolicy>;

/// Ordered rule table; the first rule to produce a policy wins. Order is
/// load-bearing: the shirt and turtleneck rules must run before the generic
/// cardigan rule so a shirt slot that merely allows cardigans is still
/// tucked under heavy layering.
const TUCKING_RULES: &[TuckingRule] = &[
    base_and_top_stay_loose,
    shirt_under_heavy_layering,
    turtleneck_under_heavy_layering,
    sweater_benefit_of_the_doubt,
    structured_knits_never_tucked,
    outer_slots,
    polo_scales_with_layers,
    two_layer_shirt,
];

/// Derive the tucking policy for one layer slot. Total: unknown slot names
/// and empty subcategory sets fall through to `Optional`.
pub fn resolve_tucking(
    slot_name: &str,
    subcategories: &[String],
    layer_count: u32,
) -> TuckingPolicy {
    let context = TuckingContext {
        role: SlotRole::from_name(slot_name),
        subcategories,
        layer_count,
    };

    TUCKING_RULES
        .iter()
        .find_map(|rule| rule(&context))
        .unwrap_or(TuckingPolicy::Optional)
}

fn base_and_top_stay_loose(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    matches!(context.role, SlotRole::Base | SlotRole::Top).then_some(TuckingPolicy::Optional)
}

fn shirt_under_heavy_layering(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    (context.role == SlotRole::Shirt && context.layer_count >= 3).then_some(TuckingPolicy::Always)
}

fn turtleneck_under_heavy_layering(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    (context.role == SlotRole::Turtleneck && context.layer_count >= 3)
        .then_some(TuckingPolicy::Always)
}

/// A sweater under three or more layers could be thin merino (tuckable) or
/// chunky (not); the records carry no weight data, so stay permissive.
fn sweater_benefit_of_the_doubt(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    (GarmentTag::Sweater.matches_any(context.subcategories) && context.layer_count >= 3)
        .then_some(TuckingPolicy::Optional)
}

fn structured_knits_never_tucked(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    [
        GarmentTag::Cardigan,
        GarmentTag::ShawlCardigan,
        GarmentTag::Blazer,
    ]
    .iter()
    .any(|tag| tag.matches_any(context.subcategories))
    .then_some(TuckingPolicy::Never)
}

fn outer_slots(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    if !matches!(context.role, SlotRole::Outer | SlotRole::Vest | SlotRole::Mid) {
        return None;
    }

    if GarmentTag::Cardigan.matches_any(context.subcategories)
        || GarmentTag::ShawlCardigan.matches_any(context.subcategories)
    {
        return Some(TuckingPolicy::Never);
    }
    if GarmentTag::Sweater.matches_any(context.subcategories) {
        return Some(TuckingPolicy::Optional);
    }
    Some(TuckingPolicy::Never)
}

fn polo_scales_with_layers(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    (context.role == SlotRole::Polo).then(|| {
        if context.layer_count >= 3 {
            TuckingPolicy::Always
        } else {
            TuckingPolicy::Optional
        }
    })
}

fn two_layer_shirt(context: &TuckingContext<'_>) -> Option<TuckingPolicy> {
    (context.role == SlotRole::Shirt && context.layer_count == 2)
        .then_some(TuckingPolicy::Optional)
}
