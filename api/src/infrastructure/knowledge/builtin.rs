use crate::application::ports::knowledge_source::KnowledgeSource;
use crate::domain::plants::plant::{Plant, PlantKnowledge};

const PLANTS: &[(&str, &[&str], &str)] = &[
    (
        "Tulsi",
        &["holy basil", "tulsi plant"],
        "To plant Tulsi: sow seeds 0.5 cm deep in warm, well-drained soil in spring or early monsoon, or root a 10 cm cutting in water. Keep it in 6-8 hours of sun, water when the topsoil is dry, and pinch off flower spikes to keep the leaves coming.",
    ),
    (
        "Neem",
        &["azadirachta indica", "neem tree"],
        "To plant Neem: soak fresh seeds overnight and sow them 1-2 cm deep, or transplant a sapling at the start of the monsoon into a 60 cm pit mixed with compost. Neem needs full sun, tolerates poor soil and drought once established, and should be watered weekly for the first year.",
    ),
    (
        "Mango",
        &["mango tree", "aam"],
        "To plant Mango: choose a grafted sapling, dig a 1 m pit filled with topsoil and manure, and plant at the start of the monsoon in full sun. Water every few days for the first month, then weekly, and stop watering two months before flowering.",
    ),
    (
        "Aloe vera",
        &["aloe", "ghritkumari"],
        "To plant Aloe vera: use a pot with drainage holes and sandy cactus mix, set the pup so the leaves sit above the soil, and wait a week before the first watering. Give it bright light and water only when the soil is completely dry.",
    ),
    (
        "Money plant",
        &["pothos", "devils ivy"],
        "To plant a Money plant: root a cutting with two nodes in water or moist potting mix. Keep it in bright, indirect light, water when the top 2 cm of soil is dry, and give it a moss stick to climb.",
    ),
    (
        "Rose",
        &["roses", "gulab"],
        "To plant a Rose: pick a spot with at least 6 hours of sun, dig a 45 cm hole with compost, and set the bud union at soil level. Water deeply twice a week, mulch the base, and prune spent blooms.",
    ),
];

/// Catalogue compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinKnowledge;

impl KnowledgeSource for BuiltinKnowledge {
    fn describe(&self) -> String {
        "builtin".into()
    }

    fn load(&self) -> anyhow::Result<PlantKnowledge> {
        let plants = PLANTS
            .iter()
            .map(|(name, aliases, guide)| Plant {
                name: (*name).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
                guide: (*guide).to_string(),
            })
            .collect();
        Ok(PlantKnowledge::new(plants)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plants::plant::words;

    #[test]
    fn builtin_catalogue_is_valid() {
        let kb = BuiltinKnowledge.load().unwrap();
        let names: Vec<&str> = kb.names().collect();
        for expected in ["Tulsi", "Neem", "Mango", "Aloe vera", "Money plant", "Rose"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn aliases_resolve() {
        let kb = BuiltinKnowledge.load().unwrap();
        let hit = kb.find_mentioned(&words("my pothos is wilting")).unwrap();
        assert_eq!(hit.name, "Money plant");
    }
}
