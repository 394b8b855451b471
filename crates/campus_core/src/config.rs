use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single row of the location table (`id,name`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationRecord {
    pub id: usize,
    pub name: String,
}

impl LocationRecord {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        LocationRecord {
            id,
            name: name.into(),
        }
    }
}

/// A single row of the edge table (`a,b,weight`).
///
/// The weight is kept signed so that invalid input can be reported instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeRecord {
    pub a: usize,
    pub b: usize,
    pub weight: i64,
}

impl EdgeRecord {
    pub fn new(a: usize, b: usize, weight: i64) -> Self {
        EdgeRecord { a, b, weight }
    }
}

/// Immutable description of a campus: named locations and the measured
/// distances between directly connected locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampusMap {
    pub locations: Vec<LocationRecord>,
    pub edges: Vec<EdgeRecord>,
}

const REFERENCE_LOCATIONS: [&str; 23] = [
    "Tuck Shop",
    "Coffee House",
    "BTech Block",
    "Happiness Hut",
    "Ravi Canteen",
    "Badminton Court",
    "Civil Block",
    "Basketball Court",
    "Santoshanand Library",
    "Digital Lab",
    "Aryabhatta Lab",
    "Param Lab",
    "Petroleum Block",
    "Mechanical Block",
    "Quick Bite Cafe",
    "Chanakya Block",
    "KP Nautiyal Block",
    "Gate 2 Bus Stop",
    "Gate 1",
    "Gate 2",
    "Convention Center",
    "Gate 1 Bus Stop",
    "CSIT Gate",
];

#[rustfmt::skip]
const REFERENCE_EDGES: [(usize, usize, i64); 39] = [
    (0, 1, 19), (1, 2, 101), (1, 3, 161), (2, 3, 70), (2, 5, 84),
    (2, 8, 71), (2, 9, 71), (2, 10, 56), (3, 4, 12), (3, 5, 68),
    (5, 6, 13), (6, 7, 52), (6, 8, 86), (6, 9, 86), (7, 8, 54),
    (7, 9, 54), (8, 10, 32), (8, 11, 27), (9, 10, 32), (9, 11, 27),
    (10, 11, 37), (10, 12, 91), (10, 13, 66), (11, 13, 57), (11, 12, 53),
    (12, 13, 62), (12, 14, 21), (14, 15, 31), (14, 16, 29), (15, 16, 12),
    // Gates and bus stops
    (18, 0, 24), (18, 20, 105), (18, 22, 91), (2, 22, 214), (3, 22, 173),
    (16, 17, 75), (19, 17, 41), (19, 21, 308), (20, 21, 185),
];

impl CampusMap {
    pub fn new(locations: Vec<LocationRecord>, edges: Vec<EdgeRecord>) -> Self {
        CampusMap { locations, edges }
    }

    /// The built-in campus map with 23 locations and 39 edges.
    pub fn reference() -> Self {
        let locations = REFERENCE_LOCATIONS
            .iter()
            .enumerate()
            .map(|(id, name)| LocationRecord::new(id, *name))
            .collect();

        let edges = REFERENCE_EDGES
            .iter()
            .map(|&(a, b, weight)| EdgeRecord::new(a, b, weight))
            .collect();

        CampusMap { locations, edges }
    }

    /// Reads a campus map from a location table (`id,name`) and an edge table
    /// (`a,b,weight`). Only the file format is checked here, the graph
    /// invariants are validated by [`Graph::from_config`].
    ///
    /// [`Graph::from_config`]: crate::graph::Graph::from_config
    pub fn from_csv(path_to_locations: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!(
            "Reading campus map from {:?} and {:?}",
            path_to_locations, path_to_edges
        );

        let mut locations = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_locations)
            .with_context(|| format!("Could not open {}", path_to_locations.display()))?;
        for result in reader.deserialize() {
            let location: LocationRecord = result.context("Failed to parse Location")?;
            locations.push(location);
        }

        let mut edges = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {}", path_to_edges.display()))?;
        for result in reader.deserialize() {
            let edge: EdgeRecord = result.context("Failed to parse Edge")?;
            edges.push(edge);
        }

        info!(
            "Campus map has {} locations and {} edges",
            locations.len(),
            edges.len()
        );
        Ok(CampusMap { locations, edges })
    }

    pub fn write_csv(&self, path_to_locations: &Path, path_to_edges: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path_to_locations)?;

        debug!("BEGIN writing locations");
        for location in &self.locations {
            wtr.serialize(location)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing locations");

        let mut wtr = csv::Writer::from_path(path_to_edges)?;
        debug!("BEGIN writing edges");
        for edge in &self.edges {
            wtr.serialize(edge)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn reference_map_has_all_rows() {
        let map = CampusMap::reference();

        assert_eq!(map.locations.len(), 23);
        assert_eq!(map.edges.len(), 39);
        assert_eq!(map.locations[14], LocationRecord::new(14, "Quick Bite Cafe"));
        assert!(map.edges.contains(&EdgeRecord::new(19, 21, 308)));
    }

    #[test]
    fn bundled_csv_matches_reference() {
        let map = CampusMap::from_csv(
            &data_dir().join("locations.csv"),
            &data_dir().join("edges.csv"),
        )
        .unwrap();

        assert_eq!(map, CampusMap::reference());
    }

    #[test]
    fn malformed_weight_is_rejected() {
        let test_data = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");
        let res = CampusMap::from_csv(
            &test_data.join("locations.csv"),
            &test_data.join("edges_malformed.csv"),
        );

        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let res = CampusMap::from_csv(
            Path::new("does/not/exist.csv"),
            &data_dir().join("edges.csv"),
        );

        let err = res.unwrap_err();
        assert!(format!("{err}").contains("does/not/exist.csv"));
    }

    #[test]
    fn write_and_read_back() {
        let dir = std::env::temp_dir().join(format!("campus_core_csv_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let locations = dir.join("locations.csv");
        let edges = dir.join("edges.csv");

        let map = CampusMap::reference();
        map.write_csv(&locations, &edges).unwrap();
        let read = CampusMap::from_csv(&locations, &edges).unwrap();

        assert_eq!(map, read);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
