use async_trait::async_trait;

use crate::application::ports::chat_responder::{ChatError, ChatResponder};
use crate::domain::plants::plant::{PlantKnowledge, words};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "namaste"];

const TOPIC_TIPS: &[(&[&str], &str)] = &[
    (
        &["water", "watering"],
        "Water deeply but less often: soak the root zone, then let the top 2-3 cm of soil dry before watering again. Young saplings need water every 2-3 days in summer.",
    ),
    (
        &["soil", "potting"],
        "Most trees and herbs prefer loamy, well-drained soil. Mix garden soil, compost and sand roughly 2:1:1 for pots, and make sure the pot has drainage holes.",
    ),
    (
        &["sun", "sunlight", "shade", "light"],
        "Fruit trees and most herbs want 6 or more hours of direct sun. Indoor plants such as money plant do well in bright, indirect light.",
    ),
    (
        &["fertilizer", "fertiliser", "compost", "manure"],
        "Feed with well-rotted compost or vermicompost every 4-6 weeks during the growing season. Avoid fertilizing a sapling in its first two weeks after planting.",
    ),
    (
        &["season", "when", "monsoon"],
        "The best time to plant most trees is at the start of the monsoon, when the soil stays moist and the roots can establish before winter.",
    ),
];

/// Keyword-driven assistant for tree plantation questions.
pub struct RuleBasedPlantBot {
    name: String,
    knowledge: PlantKnowledge,
}

impl RuleBasedPlantBot {
    pub fn new(name: impl Into<String>, knowledge: PlantKnowledge) -> Self {
        Self {
            name: name.into(),
            knowledge,
        }
    }

    pub fn knowledge(&self) -> &PlantKnowledge {
        &self.knowledge
    }

    pub fn reply(&self, message: &str) -> String {
        let input = words(message);

        if input.iter().any(|w| GREETINGS.contains(&w.as_str())) {
            return format!(
                "Hello! I'm {}. Ask me how to plant a tree, or type 'help' to see what I know.",
                self.name
            );
        }
        if input.iter().any(|w| w == "help") {
            return self.help_text();
        }
        if let Some(plant) = self.knowledge.find_mentioned(&input) {
            return plant.guide.clone();
        }
        for (keywords, tip) in TOPIC_TIPS {
            if input.iter().any(|w| keywords.contains(&w.as_str())) {
                return (*tip).to_string();
            }
        }
        "I'm not sure about that one. Type 'help' to see which plants I can explain.".into()
    }

    fn help_text(&self) -> String {
        let names: Vec<&str> = self.knowledge.names().collect();
        format!(
            "I can explain how to plant and care for: {}. You can also ask about watering, soil, sunlight, fertilizer or the best season to plant.",
            names.join(", ")
        )
    }
}

#[async_trait]
impl ChatResponder for RuleBasedPlantBot {
    async fn respond(&self, message: &str) -> Result<String, ChatError> {
        Ok(self.reply(message))
    }
}
