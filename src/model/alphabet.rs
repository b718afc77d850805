use std::collections::HashMap;

/// Distinct labels in first-occurrence order.
///
/// The order only fixes confusion-matrix row/column indices; no metric depends
/// on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAlphabet {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelAlphabet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut alphabet = Self::new();
        for label in labels {
            alphabet.insert(label);
        }
        alphabet
    }

    /// Returns the label's index, inserting it at the end if unseen.
    pub fn insert(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/alphabet.rs"]
mod tests;
