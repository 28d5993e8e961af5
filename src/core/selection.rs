//! # Team Selection
//!
//! The picked heroes, by name. Behaves as a set for membership but keeps
//! insertion order so the team reads in the order it was built. Removing a
//! hero and adding it back moves it to the end.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `name` if present, append it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.names.iter().position(|picked| picked == name) {
            Some(index) => {
                self.names.remove(index);
                false
            }
            None => {
                self.names.push(name.to_string());
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|picked| picked == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle("Ogre"));
        assert!(selection.contains("Ogre"));
        assert!(!selection.toggle("Ogre"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_readding_moves_to_end() {
        let mut selection = Selection::new();
        selection.toggle("A");
        selection.toggle("B");

        selection.toggle("A");
        assert_eq!(selection.names(), ["B"]);

        selection.toggle("A");
        assert_eq!(selection.names(), ["B", "A"]);
    }

    #[test]
    fn test_accepts_any_string() {
        let mut selection = Selection::new();
        selection.toggle("");
        selection.toggle("not a hero");
        assert_eq!(selection.len(), 2);
    }
}
