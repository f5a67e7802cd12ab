use serde_json::Map;

use crate::workflows::styling::domain::{LayerSlot, LayeringTemplate, TemperatureRange};

pub(super) fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn slot(slot_name: &str, allowed: &[&str]) -> LayerSlot {
    LayerSlot {
        slot_name: slot_name.to_string(),
        allowed_subcategories: labels(allowed),
        required: true,
        tucked_in: None,
        buttoning: None,
        extra: Map::new(),
    }
}

pub(super) fn template(
    name: &str,
    layer_count: u32,
    min_temp_c: Option<f64>,
    max_temp_c: Option<f64>,
    slots: Vec<LayerSlot>,
) -> LayeringTemplate {
    LayeringTemplate {
        name: name.to_string(),
        description: format!("{name} test template"),
        layer_count,
        min_temp_c,
        max_temp_c,
        slots,
        extra: Map::new(),
    }
}

pub(super) fn range(min_temp_c: Option<f64>, max_temp_c: Option<f64>) -> TemperatureRange {
    TemperatureRange {
        min_temp_c,
        max_temp_c,
    }
}
