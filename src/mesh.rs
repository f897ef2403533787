//! The output of an extraction.

use ahash::RandomState;
use cgmath::Point3;
use std::collections::{HashMap, HashSet};

/// A simple mesh type that holds a vector of vertices and another one of triangles.
/// This type is meant to be converted to your own mesh type via the [`std::convert::From`] trait.
///
/// `vertices` is the full vertex array of the extraction. Triangles only reference the dual
/// vertices; the edge vertices are kept so indices stay stable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// The vertices of the mesh.
    pub vertices: Vec<Point3<f32>>,
    /// Vertex index triples, 0-based.
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Whether the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles as a flat index list.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// How many triangles use each undirected edge. Keys are `(low, high)` vertex index pairs.
    pub fn edge_use_counts(&self) -> HashMap<(u32, u32), usize, RandomState> {
        let mut counts = HashMap::with_hasher(RandomState::new());
        for &[a, b, c] in &self.triangles {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                *counts.entry((from.min(to), from.max(to))).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether every edge is shared by exactly two triangles.
    pub fn is_closed_manifold(&self) -> bool {
        !self.is_empty() && self.edge_use_counts().values().all(|&count| count == 2)
    }

    /// `V - E + F`, counting only the vertices referenced by a triangle.
    pub fn euler_characteristic(&self) -> i64 {
        let vertices: HashSet<u32, RandomState> = self.triangles.iter().flatten().copied().collect();
        vertices.len() as i64 - self.edge_use_counts().len() as i64 + self.triangles.len() as i64
    }
}
