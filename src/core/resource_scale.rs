use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Appointment, flatten_resource_names};
use crate::error::{ChartError, ChartResult};

/// One row of the resource axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub offset: f64,
}

/// Ordinal mapping from resource names to evenly spaced vertical offsets.
///
/// Entries keep the flattened input order, duplicates included: a resource
/// listed by two appointments occupies two rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceScale {
    entries: Vec<ResourceEntry>,
    first_seen: IndexMap<String, usize>,
}

impl ResourceScale {
    pub fn from_names<'a, I>(names: I, drawable_height: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !drawable_height.is_finite() || drawable_height < 0.0 {
            return Err(ChartError::InvalidData(
                "resource scale height must be finite and >= 0".to_owned(),
            ));
        }

        let names: Vec<&str> = names.into_iter().collect();
        let count = names.len() as f64;
        let mut first_seen = IndexMap::with_capacity(names.len());
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                first_seen.entry(name.to_owned()).or_insert(index);
                ResourceEntry {
                    name: name.to_owned(),
                    offset: index as f64 * drawable_height / count,
                }
            })
            .collect();

        Ok(Self {
            entries,
            first_seen,
        })
    }

    /// Builds the resource axis domain from appointment data.
    pub fn from_appointments(data: &[Appointment], drawable_height: f64) -> ChartResult<Self> {
        Self::from_names(flatten_resource_names(data), drawable_height)
    }

    #[must_use]
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn domain(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset of the first row carrying `name`.
    #[must_use]
    pub fn offset_of(&self, name: &str) -> Option<f64> {
        self.first_seen
            .get(name)
            .map(|&index| self.entries[index].offset)
    }

    /// Distinct names in first-seen order.
    pub fn distinct_names(&self) -> impl Iterator<Item = &str> {
        self.first_seen.keys().map(String::as_str)
    }
}

/// Resource axis domain of `data` laid over `drawable_height` pixels.
pub fn compute_resource_domain(
    data: &[Appointment],
    drawable_height: f64,
) -> ChartResult<ResourceScale> {
    ResourceScale::from_appointments(data, drawable_height)
}

#[cfg(test)]
mod tests {
    use super::ResourceScale;

    #[test]
    fn empty_input_yields_empty_scale() {
        let scale = ResourceScale::from_names(Vec::<&str>::new(), 120.0).expect("empty scale");
        assert!(scale.is_empty());
        assert_eq!(scale.offset_of("A"), None);
    }

    #[test]
    fn offset_of_reports_first_occurrence() {
        let scale = ResourceScale::from_names(["A", "B", "A"], 90.0).expect("scale");
        assert_eq!(scale.offset_of("A"), Some(0.0));
        assert_eq!(scale.offset_of("B"), Some(30.0));
        assert_eq!(scale.distinct_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
