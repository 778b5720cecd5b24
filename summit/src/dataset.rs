use crate::model::Mountain;
use std::collections::HashMap;

/// Validated, read-only collection in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    mountains: Vec<Mountain>,
    index: HashMap<String, usize>,
}

impl Dataset {
    // Callers must have checked id uniqueness; see `json::validate_records`.
    pub(crate) fn from_validated(mountains: Vec<Mountain>) -> Self {
        let index = mountains.iter().enumerate().map(|(i, m)| (m.id.clone(), i)).collect();
        Dataset { mountains, index }
    }

    pub fn get(&self, id: &str) -> Option<&Mountain> {
        self.index.get(id).map(|&i| &self.mountains[i])
    }

    pub fn contains(&self, id: &str) -> bool { self.index.contains_key(id) }

    pub fn mountains(&self) -> &[Mountain] { &self.mountains }

    pub fn iter(&self) -> std::slice::Iter<'_, Mountain> { self.mountains.iter() }

    pub fn len(&self) -> usize { self.mountains.len() }

    pub fn is_empty(&self) -> bool { self.mountains.is_empty() }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Mountain;
    type IntoIter = std::slice::Iter<'a, Mountain>;
    fn into_iter(self) -> Self::IntoIter { self.mountains.iter() }
}
