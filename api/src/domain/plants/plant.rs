#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub name: String,
    pub aliases: Vec<String>,
    pub guide: String,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("plant knowledge must contain at least one plant")]
    Empty,
    #[error("plant #{index} has an empty name")]
    UnnamedPlant { index: usize },
    #[error("plant {name:?} has an empty guide")]
    MissingGuide { name: String },
    #[error("plant {name:?} has an empty alias")]
    EmptyAlias { name: String },
}

/// Ordered, validated plant catalogue. Earlier plants win when an input
/// mentions several.
#[derive(Debug, Clone)]
pub struct PlantKnowledge {
    plants: Vec<Plant>,
    // lower-cased word sequences per plant: its name followed by its aliases
    keys: Vec<Vec<Vec<String>>>,
}

impl PlantKnowledge {
    /// Validates `plants` and stores them with names and aliases trimmed.
    pub fn new(plants: Vec<Plant>) -> Result<Self, KnowledgeError> {
        if plants.is_empty() {
            return Err(KnowledgeError::Empty);
        }
        let mut normalized = Vec::with_capacity(plants.len());
        let mut keys = Vec::with_capacity(plants.len());
        for (index, plant) in plants.into_iter().enumerate() {
            let name = plant.name.trim().to_string();
            if name.is_empty() {
                return Err(KnowledgeError::UnnamedPlant { index });
            }
            if plant.guide.trim().is_empty() {
                return Err(KnowledgeError::MissingGuide { name });
            }
            let mut aliases = Vec::with_capacity(plant.aliases.len());
            for alias in &plant.aliases {
                let alias = alias.trim();
                if alias.is_empty() {
                    return Err(KnowledgeError::EmptyAlias { name });
                }
                aliases.push(alias.to_string());
            }
            keys.push(
                std::iter::once(&name)
                    .chain(aliases.iter())
                    .map(|k| words(k))
                    .filter(|w| !w.is_empty())
                    .collect(),
            );
            normalized.push(Plant {
                name,
                aliases,
                guide: plant.guide,
            });
        }
        Ok(Self {
            plants: normalized,
            keys,
        })
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plants.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// First plant whose name or alias appears as whole words in `input_words`.
    pub fn find_mentioned(&self, input_words: &[String]) -> Option<&Plant> {
        self.plants
            .iter()
            .zip(self.keys.iter())
            .find(|(_, keys)| keys.iter().any(|k| contains_sequence(input_words, k)))
            .map(|(plant, _)| plant)
    }
}

/// Lower-cased alphanumeric words of `text`.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_sequence(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, aliases: &[&str]) -> Plant {
        Plant {
            name: name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            guide: format!("grow {name}"),
        }
    }

    #[test]
    fn rejects_empty_and_incomplete_catalogues() {
        assert_eq!(PlantKnowledge::new(vec![]).unwrap_err(), KnowledgeError::Empty);
        assert_eq!(
            PlantKnowledge::new(vec![plant(" ", &[])]).unwrap_err(),
            KnowledgeError::UnnamedPlant { index: 0 }
        );
        let mut no_guide = plant("Neem", &[]);
        no_guide.guide = "  ".into();
        assert!(matches!(
            PlantKnowledge::new(vec![no_guide]),
            Err(KnowledgeError::MissingGuide { .. })
        ));
    }

    #[test]
    fn trims_names_and_aliases_and_rejects_blank_aliases() {
        let kb = PlantKnowledge::new(vec![plant(" Peepal ", &["  sacred fig "])]).unwrap();
        assert_eq!(kb.plants()[0].name, "Peepal");
        assert_eq!(kb.plants()[0].aliases, vec!["sacred fig".to_string()]);
        assert!(kb.find_mentioned(&words("is a sacred fig easy?")).is_some());

        assert_eq!(
            PlantKnowledge::new(vec![plant(" Peepal ", &["sacred fig", "  "])]).unwrap_err(),
            KnowledgeError::EmptyAlias {
                name: "Peepal".into()
            }
        );
    }

    #[test]
    fn matches_whole_words_and_multi_word_aliases() {
        let kb = PlantKnowledge::new(vec![
            plant("Tulsi", &["holy basil"]),
            plant("Aloe vera", &["aloe"]),
        ])
        .unwrap();

        let hit = kb.find_mentioned(&words("How do I plant HOLY basil?")).unwrap();
        assert_eq!(hit.name, "Tulsi");
        assert_eq!(kb.find_mentioned(&words("aloe-vera care")).unwrap().name, "Aloe vera");
        assert!(kb.find_mentioned(&words("tulsis")).is_none());
        assert!(kb.find_mentioned(&words("basil")).is_none());
    }

    #[test]
    fn earlier_plants_win() {
        let kb = PlantKnowledge::new(vec![plant("Mango", &[]), plant("Neem", &[])]).unwrap();
        let hit = kb.find_mentioned(&words("neem or mango?")).unwrap();
        assert_eq!(hit.name, "Mango");
    }
}
