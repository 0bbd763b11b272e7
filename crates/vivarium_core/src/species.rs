use crate::error::{Result, ValidationError};
use std::fmt;
use vivarium_data::SpeciesTable;

/// Immutable description of a kind of pet.
///
/// Shared between pets through an `Arc`. Two descriptors are equal when every
/// field matches, including the order of the evolution stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesDescriptor {
    name: String,
    evolution_stages: Vec<String>,
    max_lifespan: u64,
    habitat: String,
}

impl SpeciesDescriptor {
    /// Builds a descriptor, rejecting blank names and habitats, an empty
    /// stage list or a lifespan below one.
    pub fn new<N, S, H>(
        name: N,
        evolution_stages: impl IntoIterator<Item = S>,
        max_lifespan: i64,
        habitat: H,
    ) -> Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
        H: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let evolution_stages: Vec<String> = evolution_stages.into_iter().map(Into::into).collect();
        if evolution_stages.is_empty() {
            return Err(ValidationError::NoStages);
        }
        if max_lifespan <= 0 {
            return Err(ValidationError::NonPositiveLifespan(max_lifespan));
        }
        let habitat = habitat.into();
        if habitat.trim().is_empty() {
            return Err(ValidationError::EmptyHabitat);
        }

        Ok(Self {
            name,
            evolution_stages,
            max_lifespan: max_lifespan as u64,
            habitat,
        })
    }

    /// Species used for pets created without one: Egg, Child, Adult.
    #[must_use]
    pub fn generic() -> Self {
        Self::from_table(&vivarium_data::GENERIC)
    }

    #[must_use]
    pub fn dragon() -> Self {
        Self::from_table(&vivarium_data::DRAGON)
    }

    #[must_use]
    pub fn robot() -> Self {
        Self::from_table(&vivarium_data::ROBOT)
    }

    // Built-in tables are checked by the tests below.
    fn from_table(table: &SpeciesTable) -> Self {
        Self {
            name: table.name.to_string(),
            evolution_stages: table.stages.iter().map(|s| (*s).to_string()).collect(),
            max_lifespan: table.max_lifespan,
            habitat: table.habitat.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stage labels in evolution order.
    pub fn evolution_stages(&self) -> &[String] {
        &self.evolution_stages
    }

    pub fn stage(&self, index: usize) -> Option<&str> {
        self.evolution_stages.get(index).map(String::as_str)
    }

    pub fn stage_count(&self) -> usize {
        self.evolution_stages.len()
    }

    /// Index of the terminal stage.
    pub fn final_stage_index(&self) -> usize {
        self.evolution_stages.len() - 1
    }

    pub fn max_lifespan(&self) -> u64 {
        self.max_lifespan
    }

    pub fn habitat(&self) -> &str {
        &self.habitat
    }
}

impl fmt::Display for SpeciesDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Habitat: {}, Lifespan: {})",
            self.name, self.habitat, self.max_lifespan
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(species: &SpeciesDescriptor) -> u64 {
        let mut hasher = DefaultHasher::new();
        species.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_keeps_fields() {
        let species = SpeciesDescriptor::new("Cat", ["Kitten", "Cat"], 20, "House").unwrap();
        assert_eq!(species.name(), "Cat");
        assert_eq!(species.evolution_stages(), ["Kitten", "Cat"]);
        assert_eq!(species.max_lifespan(), 20);
        assert_eq!(species.habitat(), "House");
        assert_eq!(species.stage_count(), 2);
        assert_eq!(species.final_stage_index(), 1);
        assert_eq!(species.stage(1), Some("Cat"));
        assert_eq!(species.stage(2), None);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = SpeciesDescriptor::new("   ", ["Egg"], 1, "Home").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_empty_stages_rejected() {
        let err = SpeciesDescriptor::new("Cat", Vec::<String>::new(), 1, "Home").unwrap_err();
        assert_eq!(err, ValidationError::NoStages);
    }

    #[test]
    fn test_non_positive_lifespan_rejected() {
        let err = SpeciesDescriptor::new("Cat", ["Egg"], 0, "Home").unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveLifespan(0));
        let err = SpeciesDescriptor::new("Cat", ["Egg"], -5, "Home").unwrap_err();
        assert_eq!(err.field(), "max_lifespan");
    }

    #[test]
    fn test_blank_habitat_rejected() {
        let err = SpeciesDescriptor::new("Cat", ["Egg"], 1, "").unwrap_err();
        assert_eq!(err, ValidationError::EmptyHabitat);
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = SpeciesDescriptor::new("", Vec::<String>::new(), -1, "").unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = SpeciesDescriptor::new("Cat", ["Kitten", "Cat"], 20, "House").unwrap();
        let b = SpeciesDescriptor::new("Cat", ["Kitten", "Cat"], 20, "House").unwrap();
        let reordered = SpeciesDescriptor::new("Cat", ["Cat", "Kitten"], 20, "House").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, reordered);
    }

    #[test]
    fn test_builtins_pass_validation() {
        for builtin in [
            SpeciesDescriptor::generic(),
            SpeciesDescriptor::dragon(),
            SpeciesDescriptor::robot(),
        ] {
            let rebuilt = SpeciesDescriptor::new(
                builtin.name(),
                builtin.evolution_stages().to_vec(),
                builtin.max_lifespan() as i64,
                builtin.habitat(),
            )
            .unwrap();
            assert_eq!(rebuilt, builtin);
        }
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(
            SpeciesDescriptor::dragon().to_string(),
            "Dragon (Habitat: Caves, Lifespan: 500)"
        );
    }
}
