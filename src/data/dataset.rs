use anyhow::{bail, Result};
use burn::data::dataset::Dataset;

use crate::data::splitter;
use crate::domain::{category::CategorySet, example::NewsExample};

/// In-memory newsgroup dataset. Every label belongs to `categories`.
#[derive(Debug, Clone)]
pub struct NewsDataset {
    examples:   Vec<NewsExample>,
    categories: CategorySet,
}

impl NewsDataset {
    /// Wrap `examples`, rejecting any label outside `categories`.
    pub fn new(examples: Vec<NewsExample>, categories: CategorySet) -> Result<Self> {
        if let Some(bad) = examples.iter().find(|e| !categories.contains(&e.label)) {
            bail!("Example label '{}' is not a configured category", bad.label);
        }
        Ok(Self { examples, categories })
    }

    pub fn examples(&self) -> &[NewsExample] {
        &self.examples
    }

    /// Example count per category, in category order.
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        let mut counts = vec![0usize; self.categories.len()];
        for ex in &self.examples {
            if let Some(i) = self.categories.index_of(&ex.label) {
                counts[i] += 1;
            }
        }
        self.categories
            .iter()
            .map(str::to_string)
            .zip(counts)
            .collect()
    }

    /// Split into (train, dev) with `splitter::split_dev`.
    pub fn split_dev(self, dev_ratio: f64) -> Result<(Self, Self)> {
        let categories   = self.categories;
        let (train, dev) = splitter::split_dev(self.examples, dev_ratio)?;
        Ok((
            Self { examples: train, categories: categories.clone() },
            Self { examples: dev, categories },
        ))
    }

    /// Shuffle with `seed`, then split. See `splitter::shuffle_then_split`.
    pub fn shuffle_split_dev(self, dev_ratio: f64, seed: u64) -> Result<(Self, Self)> {
        let categories   = self.categories;
        let (train, dev) = splitter::shuffle_then_split(self.examples, dev_ratio, seed)?;
        Ok((
            Self { examples: train, categories: categories.clone() },
            Self { examples: dev, categories },
        ))
    }
}

impl Dataset<NewsExample> for NewsDataset {
    fn get(&self, index: usize) -> Option<NewsExample> {
        self.examples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::sort_key;

    fn dataset(n: usize) -> NewsDataset {
        let categories = CategorySet::default();
        let labels: Vec<String> = categories.iter().map(str::to_string).collect();
        let examples = (0..n)
            .map(|i| NewsExample::new("w ".repeat(i + 1).trim(), labels[i % labels.len()].clone()))
            .collect();
        NewsDataset::new(examples, categories).unwrap()
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let examples = vec![NewsExample::new("text", "rec.autos")];
        assert!(NewsDataset::new(examples, CategorySet::default()).is_err());
    }

    #[test]
    fn test_dataset_trait_access() {
        let ds = dataset(5);
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.get(0).unwrap().label, "alt.atheism");
        assert_eq!(ds.get(4).unwrap().label, "alt.atheism");
        assert!(ds.get(5).is_none());
        assert_eq!(ds.iter().count(), 5);
    }

    #[test]
    fn test_label_counts_in_category_order() {
        let counts = dataset(6).label_counts();
        assert_eq!(
            counts,
            vec![
                ("alt.atheism".to_string(), 2),
                ("comp.graphics".to_string(), 2),
                ("sci.med".to_string(), 1),
                ("soc.religion.christian".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_split_keeps_categories_and_sizes() {
        let (train, dev) = dataset(40).split_dev(0.1).unwrap();
        assert_eq!(train.len(), 36);
        assert_eq!(dev.len(), 4);
        assert_eq!(dev.label_counts().len(), 4);
        assert!(dev
            .examples()
            .iter()
            .all(|e| CategorySet::default().contains(&e.label)));
    }

    #[test]
    fn test_sort_key_over_dataset() {
        let ds = dataset(3);
        let keys: Vec<usize> = ds.examples().iter().map(sort_key).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }
}
