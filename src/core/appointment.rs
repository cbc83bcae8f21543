use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Named entity occupying a row of the vertical axis (a room, a person).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
}

impl Resource {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One scheduled entry. Only the resource list is consumed by the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Appointment {
    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    #[must_use]
    pub fn with_resource_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Resource::new).collect())
    }
}

/// Flattens resource names across `data` in order, keeping duplicates.
#[must_use]
pub fn flatten_resource_names(data: &[Appointment]) -> Vec<&str> {
    data.iter()
        .flat_map(|appointment| appointment.resources.iter())
        .map(|resource| resource.name.as_str())
        .collect()
}

/// Parses the `[{"resources": [{"name": ..}]}]` payload delivered by the data client.
pub fn appointments_from_json_str(input: &str) -> ChartResult<Vec<Appointment>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse appointments: {e}")))
}
