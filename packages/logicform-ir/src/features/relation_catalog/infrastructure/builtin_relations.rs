//! Built-in relation catalog
//!
//! Natural-language relation phrases from the question annotations mapped to
//! canonical predicates and composition strategies.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::errors::{ConversionError, Result};
use crate::features::relation_catalog::domain::{Placement, RelationDescriptor};

/// Relation catalog
///
/// Immutable after construction; shared by every conversion run.
#[derive(Debug)]
pub struct RelationCatalog {
    relations: HashMap<&'static str, RelationDescriptor>,
}

impl RelationCatalog {
    /// Create the catalog with every built-in phrase
    pub fn new() -> Self {
        let mut catalog = Self {
            relations: HashMap::with_capacity(256),
        };
        catalog.load_plain_relations();
        catalog.load_composite_relations();
        catalog.load_special_relations();
        catalog
    }

    /// Descriptor for a relation phrase
    ///
    /// The phrase is trimmed and `_` is read as a space, so `on_top_of` and
    /// `on top of` name the same entry.
    pub fn lookup(&self, phrase: &str) -> Result<&RelationDescriptor> {
        let normalized = phrase.trim().replace('_', " ");
        self.relations
            .get(normalized.as_str())
            .ok_or_else(|| ConversionError::unknown_relation(phrase))
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.lookup(phrase).is_ok()
    }

    /// All known phrases, sorted
    pub fn phrases(&self) -> Vec<&'static str> {
        let mut phrases: Vec<&'static str> = self.relations.keys().copied().collect();
        phrases.sort_unstable();
        phrases
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    fn load_plain_relations(&mut self) {
        const PLAIN: &[(&str, &str)] = &[
            ("to the right of", "right_of"),
            ("in the middle of", "in_middle_of"),
            ("on", "on"),
            ("to the left of", "left_of"),
            ("by", "by"),
            ("in", "in"),
            ("underneath", "under"),
            ("carrying", "carrying"),
            ("behind", "behind"),
            ("observing", "observing"),
            ("perched on", "on"),
            ("wearing", "wearing"),
            ("near", "near"),
            ("along", "along"),
            ("in front of", "front_of"),
            ("on the back of", "back_of"),
            ("hitting", "hitting"),
            ("with", "with"),
            ("full of", "full_of"),
            ("on top of", "on_top_of"),
            ("above", "above"),
            ("covered in", "covered_in"),
            ("covered by", "covered_in"),
            ("wrapped in", "wrapped_in"),
            ("of", "of"),
            ("helping", "helping"),
            ("feeding", "feeding"),
            ("reflected in", "reflected_in"),
            ("holding", "holding"),
            ("holding onto", "holding"),
            ("drinking from", "drinks_from"),
            ("riding", "rides"),
            ("using", "uses"),
            ("below", "below"),
            ("hanging on", "hangs_on"),
            ("hung on", "hangs_on"),
            ("hanging from", "hangs_on"),
            ("leaning against", "leans_against"),
            ("kicking", "kicks"),
            ("plugged into", "plugged_into"),
            ("next to", "next_to"),
            ("smiling at", "smiling_at"),
            ("eating", "eating"),
            ("drinking", "drinking"),
            ("flying", "flying"),
            ("draped over", "draped_over"),
            ("surrounding", "surrounding"),
            ("pulled by", "pulled_by"),
            ("looking at", "looking_at"),
            ("looking down at", "looking_at"),
            ("looking into", "looking_into"),
            ("looking", "looking_at"),
            ("under", "under"),
            ("over", "over"),
            ("preparing", "preparing"),
            ("throwing", "throwing"),
            ("topped with", "topped_with"),
            ("around", "around"),
            ("covering", "covering"),
            ("pulling", "pulling"),
            ("leading", "leading"),
            ("riding on", "riding"),
            ("riding in", "riding"),
            ("beside", "beside"),
            ("playing with", "playing_with"),
            ("hugging", "hugging"),
            ("edge of", "edge_of"),
            ("center of", "center_of"),
            ("facing", "facing"),
            ("watching", "watching"),
            ("inside", "in"),
            ("opening", "opening"),
            ("close to", "close"),
            ("talking on", "talking_on"),
            ("leaning on", "leaning_on"),
            ("beneath", "below"),
            ("jumping over", "jumping_over"),
            ("between", "between"),
            ("slicing", "slicing"),
            ("picking up", "picking up"),
            ("filled with", "filled_with"),
            ("touching", "touching"),
            ("at", "at"),
            ("cutting", "cutting"),
            ("smoking", "smoking"),
            ("following", "following"),
            ("covered with", "covered_in"),
            ("printed on", "printed_on"),
            ("pushed by", "pushed_by"),
            ("posing with", "posing with"),
            ("hanging off", "hanging_off"),
            ("cleaning", "cleaning"),
            ("attached to", "attached_to"),
            ("looking through", "looking_through"),
            ("looking in", "looking_in"),
            ("stuck in", "stuck_in"),
            ("grazing on", "grazing"),
            ("leaning over", "leaning_over"),
            ("on the side of", "on_side"),
            ("on the front of", "on_front"),
            ("swinging", "swinging"),
            ("reaching for", "reaching_for"),
            ("growing on", "growing_on"),
            ("biting", "biting"),
            ("leaving", "leaving"),
            ("entering", "entering"),
            ("contain", "contain"),
            ("crossing", "crossing"),
            ("licking", "licking"),
            ("connected to", "connected_to"),
            ("catching", "catching"),
            ("kept in", "kept_in"),
            ("playing", "playing"),
            ("making", "making"),
            ("photographing", "photographing"),
            ("guiding", "guiding"),
            ("reading", "reading"),
            ("driving", "driving"),
            ("pushing", "pushing"),
            ("petting", "petting"),
            ("waiting for", "waiting_for"),
            ("selling", "selling"),
            ("sniffing", "sniffing"),
            ("coming from", "coming_from"),
            ("coming out of", "comming_from"),
            ("typing on", "typing_on"),
            ("brushing", "brushing"),
            ("mounted on", "on"),
            ("seen through", "seen_through"),
            ("beyond", "behind"),
            ("across", "across"),
            ("walking across", "walking_across"),
            ("moving", "moving"),
            ("working on", "working_on"),
        ];

        for &(phrase, predicate) in PLAIN {
            self.relations
                .insert(phrase, RelationDescriptor::Plain { predicate });
        }
    }

    fn load_composite_relations(&mut self) {
        // Activity verbs
        self.activity("parked next to", "parked", "next to");
        self.activity("parked in", "parked", "in");
        self.activity("parked at", "parked", "at");
        self.activity("parked on", "parked", "on");
        self.activity("running in", "running", "in");
        self.activity("walking down", "walking", "on");
        self.activity("walking in", "walking", "in");
        self.activity("walking on", "walking", "on");
        self.activity("walking past", "walking", "near");
        self.activity("walking along", "walking", "along");
        self.activity("walking with", "walking", "with");
        self.activity("driving down", "driving", "on");
        self.activity("driving on", "driving", "on");
        self.activity("skiing on", "skiing", "on");
        self.activity("resting on", "resting", "on");
        self.activity("traveling on", "treveling", "on");
        self.activity("flying in", "flying", "in");
        self.activity("stacked on", "stacked", "on");
        self.activity("floating on", "floating", "on");
        self.activity("floating in", "floating", "in");
        self.activity("skating on", "skating", "on");
        self.activity("playing in", "playing", "in");
        self.activity("playing on", "playing", "on");
        self.activity("hanging above", "hanging", "above");
        self.activity("eating in", "eating", "in");

        // Pose verbs
        self.pose("standing next to", "standing", "next to");
        self.pose("standing in front of", "standing", "in front of");
        self.pose("standing on", "standing", "on");
        self.pose("standing behind", "standing", "behind");
        self.pose("standing on top of", "standing", "on");
        self.pose("standing near", "standing", "near");
        self.pose("standing by", "standing", "near");
        self.pose("standing in", "standing", "in");
        self.pose("standing beside", "standing", "beside");
        self.pose("standing at", "standing", "at");
        self.pose("standing under", "standing", "under");
        self.pose("sitting on top of", "sitting", "on top of");
        self.pose("sitting with", "sitting", "with");
        self.pose("sitting next to", "sitting", "next to");
        self.pose("sitting on", "sitting", "on");
        self.pose("sitting behind", "sitting", "behind");
        self.pose("sitting at", "sitting", "at");
        self.pose("sitting in", "sitting", "in");
        self.pose("sitting in front of", "sitting", "in front of");
        self.pose("sitting near", "sitting", "near");
        self.pose("sitting beside", "sitting", "beside");
        self.pose("lying in", "lays", "in");
        self.pose("lying on", "lays", "on");
        self.pose("lying next to", "lays", "next to");
        self.pose("lying on top of", "lays", "on");
    }

    fn load_special_relations(&mut self) {
        let edge = self.plain_predicate("edge of");
        let on = self.plain_predicate("on");
        self.relations.insert(
            "on the edge of",
            RelationDescriptor::Positional {
                placement: Placement::Edge,
                frame: edge,
                anchor: on,
            },
        );

        let center = self.plain_predicate("center of");
        let inside = self.plain_predicate("in");
        self.relations.insert(
            "in the center of",
            RelationDescriptor::Positional {
                placement: Placement::Center,
                frame: center,
                anchor: inside,
            },
        );

        self.relations.insert(
            "same color",
            RelationDescriptor::SharedAttribute { attribute: "color" },
        );
        self.relations.insert(
            "same material",
            RelationDescriptor::SharedAttribute {
                attribute: "material",
            },
        );

        self.relations.insert(
            "worn on",
            RelationDescriptor::Inverted {
                predicate: "wearing",
            },
        );
        self.relations.insert(
            "surrounded by",
            RelationDescriptor::Inverted {
                predicate: "surrounding",
            },
        );
        self.relations.insert(
            "wrapped around",
            RelationDescriptor::Inverted {
                predicate: "wrapped_in",
            },
        );
    }

    fn activity(&mut self, phrase: &'static str, verb: &'static str, base: &str) {
        self.composite(phrase, "activity", verb, base);
    }

    fn pose(&mut self, phrase: &'static str, verb: &'static str, base: &str) {
        self.composite(phrase, "pose", verb, base);
    }

    fn composite(
        &mut self,
        phrase: &'static str,
        filter_kind: &'static str,
        filter_value: &'static str,
        base: &str,
    ) {
        let predicate = self.plain_predicate(base);
        self.relations.insert(
            phrase,
            RelationDescriptor::Composite {
                filter_kind,
                filter_value,
                predicate,
            },
        );
    }

    /// Predicate of an already loaded plain phrase
    fn plain_predicate(&self, phrase: &str) -> &'static str {
        match self.relations.get(phrase) {
            Some(RelationDescriptor::Plain { predicate }) => *predicate,
            other => unreachable!("base phrase '{}' is not plain: {:?}", phrase, other),
        }
    }
}

impl Default for RelationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// Global instance
lazy_static! {
    /// Global relation catalog, built once on first use
    pub static ref RELATION_CATALOG: RelationCatalog = RelationCatalog::new();
}
