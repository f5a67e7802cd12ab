use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structural position a garment layer occupies within an outfit template.
///
/// Parsed from the free-text `slot_name` carried by stored templates;
/// anything outside the known vocabulary maps to `Other` and falls through
/// to the resolvers' default branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Base,
    Top,
    Shirt,
    Turtleneck,
    Polo,
    Outer,
    Vest,
    Mid,
    Other,
}

impl SlotRole {
    pub fn from_name(name: &str) -> Self {
        match name {
            "base_layer" => Self::Base,
            "top_layer" => Self::Top,
            "shirt_layer" => Self::Shirt,
            "turtleneck_layer" => Self::Turtleneck,
            "polo_layer" => Self::Polo,
            "outer_layer" => Self::Outer,
            "vest_layer" => Self::Vest,
            "mid_layer" => Self::Mid,
            _ => Self::Other,
        }
    }
}

/// Garment-type vocabulary the styling rules test subcategory labels against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentTag {
    Cardigan,
    ShawlCardigan,
    Blazer,
    Sweater,
    Polo,
    Henley,
    TShirt,
    Undershirt,
    Linen,
    ShortSleeve,
    Hawaiian,
    Vest,
    Jacket,
    Coat,
    Parka,
    Turtleneck,
    Flannel,
}

impl GarmentTag {
    pub const fn keyword(self) -> &'static str {
        match self {
            GarmentTag::Cardigan => "Cardigan",
            GarmentTag::ShawlCardigan => "Shawl Cardigan",
            GarmentTag::Blazer => "Blazer",
            GarmentTag::Sweater => "Sweater",
            GarmentTag::Polo => "Polo",
            GarmentTag::Henley => "Henley",
            GarmentTag::TShirt => "T-shirt",
            GarmentTag::Undershirt => "Undershirt",
            GarmentTag::Linen => "Linen",
            GarmentTag::ShortSleeve => "Short-sleeve",
            GarmentTag::Hawaiian => "Hawaiian",
            GarmentTag::Vest => "Vest",
            GarmentTag::Jacket => "Jacket",
            GarmentTag::Coat => "Coat",
            GarmentTag::Parka => "Parka",
            GarmentTag::Turtleneck => "Turtleneck",
            GarmentTag::Flannel => "Flannel",
        }
    }

    /// Substring containment against the free-text labels, so a
    /// "Shawl Cardigan" label satisfies the `Cardigan` tag. Intentional:
    /// the stored vocabulary refines labels with qualifiers and the rules
    /// must keep matching the broader family.
    pub fn matches_any(self, labels: &[String]) -> bool {
        labels.iter().any(|label| label.contains(self.keyword()))
    }
}

/// Whether a layer's hem should be tucked into lower garments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuckingPolicy {
    Always,
    Never,
    Optional,
}

impl TuckingPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            TuckingPolicy::Always => "always",
            TuckingPolicy::Never => "never",
            TuckingPolicy::Optional => "optional",
        }
    }
}

/// How a buttoned layer should be fastened or left open.
///
/// Legacy collections stored `n/a` for the non-applicable case; the alias
/// keeps them loadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtoningPolicy {
    #[serde(alias = "n/a")]
    NotApplicable,
    AlwaysOneUndone,
    OneButtonUndone,
    UnbuttonedOverBase,
}

impl ButtoningPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            ButtoningPolicy::NotApplicable => "not_applicable",
            ButtoningPolicy::AlwaysOneUndone => "always_one_undone",
            ButtoningPolicy::OneButtonUndone => "one_button_undone",
            ButtoningPolicy::UnbuttonedOverBase => "unbuttoned_over_base",
        }
    }
}

/// Inclusive ambient temperature window an outfit template is designed for.
/// Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min_temp_c: Option<f64>,
    pub max_temp_c: Option<f64>,
}

/// One garment slot of an outfit template.
///
/// `tucked_in` and `buttoning` are the enriched fields; they stay absent
/// until an enrichment pass runs. Unrecognized fields are captured in
/// `extra` so the stored collection round-trips without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSlot {
    pub slot_name: String,
    #[serde(default)]
    pub allowed_subcategories: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tucked_in: Option<TuckingPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttoning: Option<ButtoningPolicy>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stored outfit template: an ordered sequence of layer slots plus the
/// context the resolvers read (layer count and temperature window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeringTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_layer_count")]
    pub layer_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<LayerSlot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn default_layer_count() -> u32 {
    1
}

impl LayeringTemplate {
    /// Temperature window for the resolvers; `None` when the template
    /// carries neither bound.
    pub fn temp_range(&self) -> Option<TemperatureRange> {
        if self.min_temp_c.is_none() && self.max_temp_c.is_none() {
            return None;
        }
        Some(TemperatureRange {
            min_temp_c: self.min_temp_c,
            max_temp_c: self.max_temp_c,
        })
    }
}
