use crate::utils::constants::DEMO_PLANTS;
use anyhow::{Error, bail};
use parking_lot::Mutex;
use rand::prelude::*;

/// Ordered, immutable set of labels the detector can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new<I, S>(labels: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = Self {
            labels: labels.into_iter().map(Into::into).collect(),
        };
        if set.is_empty() {
            bail!("label set must contain at least one label");
        }
        Ok(set)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            labels: DEMO_PLANTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Uniform random choice over a [`LabelSet`], shared across requests.
pub struct LabelPicker {
    labels: LabelSet,
    rng: Mutex<StdRng>,
}

impl LabelPicker {
    pub fn from_entropy(labels: LabelSet) -> Self {
        Self {
            labels,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(labels: LabelSet, seed: u64) -> Self {
        Self {
            labels,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn pick(&self) -> &str {
        let mut rng = self.rng.lock();
        let idx = rng.gen_range(0..self.labels.len());
        &self.labels.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_set_is_the_demo_plants_in_order() {
        let set = LabelSet::default();
        assert_eq!(
            set.as_slice(),
            &["sweet basil", "meidical neem", "aloe vera", "tulsi"]
        );
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(LabelSet::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn picks_stay_within_the_set() {
        let picker = LabelPicker::from_entropy(LabelSet::default());
        for _ in 0..100 {
            let label = picker.pick().to_string();
            assert!(picker.labels().as_slice().contains(&label));
        }
    }

    #[test]
    fn seeded_picker_eventually_returns_every_label() {
        let picker = LabelPicker::with_seed(LabelSet::default(), 7);
        let seen: HashSet<String> = (0..200).map(|_| picker.pick().to_string()).collect();
        assert_eq!(seen.len(), picker.labels().len());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = LabelPicker::with_seed(LabelSet::default(), 42);
        let b = LabelPicker::with_seed(LabelSet::default(), 42);
        let left: Vec<String> = (0..20).map(|_| a.pick().to_string()).collect();
        let right: Vec<String> = (0..20).map(|_| b.pick().to_string()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn single_label_set_always_returns_it() {
        let picker = LabelPicker::with_seed(LabelSet::new(["tulsi"]).unwrap(), 1);
        assert_eq!(picker.pick(), "tulsi");
    }
}
