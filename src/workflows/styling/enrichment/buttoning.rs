use crate::workflows::styling::domain::{ButtoningPolicy, GarmentTag, SlotRole, TemperatureRange};

/// Inclusive threshold above which a shirt is styled open over the base
/// layer rather than buttoned to the standard smart-casual default.
pub const WARM_WEATHER_MIN_C: f64 = 17.0;

/// Inputs shared by every buttoning rule.
struct ButtoningContext<'a> {
    role: SlotRole,
    subcategories: &'a [String],
    temp_range: Option<&'a TemperatureRange>,
}

type ButtoningRule = fn(&ButtoningContext<'_>) -> Option<ButtoningPolicy>;

/// Ordered rule table, first match wins. The shirt climate rule sits ahead
/// of the label rules so a shirt slot allowing linen still keys off the
/// template's temperature window.
const BUTTONING_RULES: &[ButtoningRule] = &[
    buttonless_base,
    polo_collar,
    henley_collar,
    shirt_by_climate,
    linen_worn_open,
    warm_weather_cuts,
    outerwear_not_styled,
    flannel_worn_open,
];

/// Derive the buttoning policy for one layer slot. Total: a missing
/// temperature range or minimum bound routes the shirt rule to its
/// standard default, and unknown inputs fall through to `NotApplicable`.
pub fn resolve_buttoning(
    slot_name: &str,
    subcategories: &[String],
    temp_range: Option<&TemperatureRange>,
) -> ButtoningPolicy {
    let context = ButtoningContext {
        role: SlotRole::from_name(slot_name),
        subcategories,
        temp_range,
    };

    BUTTONING_RULES
        .iter()
        .find_map(|rule| rule(&context))
        .unwrap_or(ButtoningPolicy::NotApplicable)
}

fn buttonless_base(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    (context.role == SlotRole::Base
        || GarmentTag::TShirt.matches_any(context.subcategories)
        || GarmentTag::Undershirt.matches_any(context.subcategories))
    .then_some(ButtoningPolicy::NotApplicable)
}

fn polo_collar(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    (GarmentTag::Polo.matches_any(context.subcategories) || context.role == SlotRole::Polo)
        .then_some(ButtoningPolicy::AlwaysOneUndone)
}

fn henley_collar(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    GarmentTag::Henley
        .matches_any(context.subcategories)
        .then_some(ButtoningPolicy::AlwaysOneUndone)
}

fn shirt_by_climate(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    if context.role != SlotRole::Shirt {
        return None;
    }

    let warm = context
        .temp_range
        .and_then(|range| range.min_temp_c)
        .is_some_and(|min| min >= WARM_WEATHER_MIN_C);

    Some(if warm {
        ButtoningPolicy::UnbuttonedOverBase
    } else {
        ButtoningPolicy::OneButtonUndone
    })
}

fn linen_worn_open(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    GarmentTag::Linen
        .matches_any(context.subcategories)
        .then_some(ButtoningPolicy::UnbuttonedOverBase)
}

fn warm_weather_cuts(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    (GarmentTag::ShortSleeve.matches_any(context.subcategories)
        || GarmentTag::Hawaiian.matches_any(context.subcategories))
    .then_some(ButtoningPolicy::UnbuttonedOverBase)
}

/// Buttoning is not a meaningfully styled attribute for these families.
fn outerwear_not_styled(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    [
        GarmentTag::Cardigan,
        GarmentTag::Blazer,
        GarmentTag::Vest,
        GarmentTag::Jacket,
        GarmentTag::Coat,
        GarmentTag::Parka,
        GarmentTag::Sweater,
        GarmentTag::Turtleneck,
    ]
    .iter()
    .any(|tag| tag.matches_any(context.subcategories))
    .then_some(ButtoningPolicy::NotApplicable)
}

fn flannel_worn_open(context: &ButtoningContext<'_>) -> Option<ButtoningPolicy> {
    GarmentTag::Flannel
        .matches_any(context.subcategories)
        .then_some(ButtoningPolicy::UnbuttonedOverBase)
}
