//! Dataset acquisition: synthetic generators and CSV ingestion.

mod csv;
mod generator;

pub use self::csv::{parse_points, read_points_from_path};
pub use self::generator::{blobs, circles, generate, moons};

use serde::{Deserialize, Serialize};

use crate::cluster::DatasetShape;

/// A single 2-D observation.
///
/// `cluster` stays `None` until an assignment strategy runs. Once assigned the
/// label is either in `[0, k)` for that call's `k` or the noise sentinel
/// [`crate::cluster::NOISE_LABEL`], which only the DBSCAN-labeled path emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cluster: Option<i64>,
}

impl Point {
    /// An unassigned point.
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            x,
            y,
            cluster: None,
        }
    }

    /// Euclidean distance from the origin.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// The datasets selectable in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetType {
    Moons,
    Blobs,
    Circles,
    /// A user-uploaded CSV file. Has no synthetic form.
    Custom,
}

impl DatasetType {
    /// Display label used in result records and commentary prompts.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetType::Moons => "Moons",
            DatasetType::Blobs => "Blobs",
            DatasetType::Circles => "Circles",
            DatasetType::Custom => "Custom",
        }
    }

    /// The geometric shape class driving assignment-strategy dispatch.
    pub fn shape(&self) -> DatasetShape {
        match self {
            DatasetType::Moons => DatasetShape::Moons,
            DatasetType::Circles => DatasetShape::Circles,
            DatasetType::Blobs | DatasetType::Custom => DatasetShape::Globular,
        }
    }
}

impl std::fmt::Display for DatasetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
