//! Index-based half-edge representation of convex polyhedra.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::ShapeError;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, SortedPair};
use smallvec::SmallVec;

/// A vertex of a half-edge structure.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdgeVertex {
    /// Index of this vertex position in the point buffer of the polyhedron.
    pub point: u32,
    /// Indices of the half-edges starting at this vertex.
    pub outgoing: SmallVec<[u32; 4]>,
}

/// A face of a half-edge structure.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdgeFace {
    /// The vertices of this face, counter-clockwise when seen from outside.
    pub vertices: SmallVec<[u32; 4]>,
    /// The outward unit normal of this face.
    pub normal: UnitVector<Real>,
    /// The faces sharing an edge with this face, in the order of its edges.
    pub adjacent_faces: SmallVec<[u32; 4]>,
    /// The half-edge starting at `vertices[0]`.
    pub first_half_edge: u32,
}

/// A directed edge of a half-edge structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// The vertex this half-edge starts from.
    pub origin: u32,
    /// The half-edge with the opposite direction, belonging to the adjacent face.
    pub twin: u32,
    /// The next half-edge around the same face.
    pub next: u32,
    /// The face this half-edge belongs to.
    pub face: u32,
}

/// The topology of a closed convex polyhedron.
///
/// Vertices, faces and half-edges are stored in flat arrays and reference
/// each other by index. The structure is built once and never modified
/// afterward, except for its face normals when the owning shape is rescaled.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdgeStructure {
    vertices: Vec<HalfEdgeVertex>,
    faces: Vec<HalfEdgeFace>,
    half_edges: Vec<HalfEdge>,
}

impl HalfEdgeStructure {
    /// Builds the half-edge structure of the closed polyhedron with the given
    /// vertex positions and face vertex lists.
    ///
    /// Faces may be given in any winding: each face is reoriented so its normal
    /// points away from the centroid of `points`. Fails if a face is degenerate,
    /// references an invalid vertex, or if an edge does not have exactly two
    /// incident faces.
    pub fn new<F: AsRef<[u32]>>(points: &[Point<Real>], faces: &[F]) -> Result<Self, ShapeError> {
        if points.len() < 4 || faces.len() < 4 {
            return Err(ShapeError::TooFewVertices);
        }

        let centroid = centroid(points);
        let mut oriented_faces: Vec<(SmallVec<[u32; 4]>, UnitVector<Real>)> =
            Vec::with_capacity(faces.len());

        for (fid, face) in faces.iter().enumerate() {
            let fid = fid as u32;
            let mut vertices: SmallVec<[u32; 4]> = SmallVec::new();

            for &index in face.as_ref() {
                if index as usize >= points.len() {
                    return Err(ShapeError::InvalidVertexIndex { face: fid, index });
                }

                if vertices.last() != Some(&index) {
                    vertices.push(index);
                }
            }

            while vertices.len() > 1 && vertices.first() == vertices.last() {
                let _ = vertices.pop();
            }

            let mut distinct = vertices.clone();
            distinct.sort_unstable();
            distinct.dedup();

            if vertices.len() < 3 || distinct.len() != vertices.len() {
                return Err(ShapeError::DegenerateFace { face: fid });
            }

            let mut normal = utils::ccw_polygon_normal(points, vertices.iter().copied())
                .ok_or(ShapeError::DegenerateFace { face: fid })?;
            let face_center = face_centroid(points, &vertices);

            if normal.dot(&(face_center - centroid)) < 0.0 {
                vertices.reverse();
                normal = -normal;
            }

            oriented_faces.push((vertices, normal));
        }

        let mut edge_faces: HashMap<SortedPair<u32>, u32> = HashMap::default();
        for (vertices, _) in &oriented_faces {
            for k in 0..vertices.len() {
                let a = vertices[k];
                let b = vertices[(k + 1) % vertices.len()];
                let count = edge_faces.entry(SortedPair::new(a, b)).or_insert(0);
                *count += 1;

                if *count > 2 {
                    return Err(ShapeError::NonManifoldEdge { v1: a, v2: b });
                }
            }
        }

        let mut half_edges = Vec::new();
        let mut directed: HashMap<(u32, u32), u32> = HashMap::default();
        let mut structure_faces = Vec::with_capacity(oriented_faces.len());

        for (fid, (vertices, normal)) in oriented_faces.into_iter().enumerate() {
            let base = half_edges.len() as u32;
            let n = vertices.len() as u32;

            for k in 0..n {
                let a = vertices[k as usize];
                let b = vertices[((k + 1) % n) as usize];

                match directed.entry((a, b)) {
                    Entry::Occupied(_) => {
                        return Err(ShapeError::InconsistentWinding { v1: a, v2: b })
                    }
                    Entry::Vacant(e) => {
                        let _ = e.insert(base + k);
                    }
                }

                half_edges.push(HalfEdge {
                    origin: a,
                    twin: u32::MAX,
                    next: base + (k + 1) % n,
                    face: fid as u32,
                });
            }

            structure_faces.push(HalfEdgeFace {
                vertices,
                normal,
                adjacent_faces: SmallVec::new(),
                first_half_edge: base,
            });
        }

        for eid in 0..half_edges.len() {
            let origin = half_edges[eid].origin;
            let destination = half_edges[half_edges[eid].next as usize].origin;

            match directed.get(&(destination, origin)) {
                Some(twin) => half_edges[eid].twin = *twin,
                None => {
                    return Err(ShapeError::OpenEdge {
                        v1: origin,
                        v2: destination,
                    })
                }
            }
        }

        let mut vertices: Vec<_> = (0..points.len() as u32)
            .map(|point| HalfEdgeVertex {
                point,
                outgoing: SmallVec::new(),
            })
            .collect();

        for (eid, edge) in half_edges.iter().enumerate() {
            vertices[edge.origin as usize].outgoing.push(eid as u32);
        }

        for face in &mut structure_faces {
            let mut eid = face.first_half_edge;
            for _ in 0..face.vertices.len() {
                let edge = half_edges[eid as usize];
                face.adjacent_faces.push(half_edges[edge.twin as usize].face);
                eid = edge.next;
            }
        }

        let result = Self {
            vertices,
            faces: structure_faces,
            half_edges,
        };
        debug_assert!(result.check_invariants());
        Ok(result)
    }

    /// The number of vertices of this structure.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of faces of this structure.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The number of half-edges of this structure (twice the number of edges).
    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// The number of undirected edges of this structure.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// The `i`-th vertex.
    #[inline]
    pub fn vertex(&self, i: u32) -> &HalfEdgeVertex {
        &self.vertices[i as usize]
    }

    /// The `i`-th face.
    #[inline]
    pub fn face(&self, i: u32) -> &HalfEdgeFace {
        &self.faces[i as usize]
    }

    /// The `i`-th half-edge.
    #[inline]
    pub fn half_edge(&self, i: u32) -> &HalfEdge {
        &self.half_edges[i as usize]
    }

    /// All the vertices of this structure.
    pub fn vertices(&self) -> &[HalfEdgeVertex] {
        &self.vertices
    }

    /// All the faces of this structure.
    pub fn faces(&self) -> &[HalfEdgeFace] {
        &self.faces
    }

    /// All the half-edges of this structure.
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    /// The twin of the `i`-th half-edge.
    #[inline]
    pub fn twin(&self, i: u32) -> u32 {
        self.half_edges[i as usize].twin
    }

    /// The half-edge following the `i`-th half-edge around its face.
    #[inline]
    pub fn next(&self, i: u32) -> u32 {
        self.half_edges[i as usize].next
    }

    /// The vertex the `i`-th half-edge starts from.
    #[inline]
    pub fn origin(&self, i: u32) -> u32 {
        self.half_edges[i as usize].origin
    }

    /// The vertex the `i`-th half-edge ends at.
    #[inline]
    pub fn destination(&self, i: u32) -> u32 {
        self.origin(self.next(i))
    }

    /// The outward normal of the `i`-th face.
    #[inline]
    pub fn face_normal(&self, i: u32) -> UnitVector<Real> {
        self.faces[i as usize].normal
    }

    /// The half-edges starting at the `i`-th vertex.
    #[inline]
    pub fn vertex_outgoing(&self, i: u32) -> &[u32] {
        &self.vertices[i as usize].outgoing
    }

    /// The faces sharing an edge with the `i`-th face.
    #[inline]
    pub fn adjacent_faces(&self, i: u32) -> &[u32] {
        &self.faces[i as usize].adjacent_faces
    }

    /// Iterates through the half-edges of the `i`-th face, in winding order.
    pub fn face_half_edges(&self, i: u32) -> impl Iterator<Item = u32> + '_ {
        let face = &self.faces[i as usize];
        let mut curr = face.first_half_edge;
        (0..face.vertices.len()).map(move |_| {
            let result = curr;
            curr = self.half_edges[curr as usize].next;
            result
        })
    }

    /// Iterates through one half-edge of each undirected edge.
    pub fn unique_edges(&self) -> impl Iterator<Item = u32> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(i, e)| (*i as u32) < e.twin)
            .map(|(i, _)| i as u32)
    }

    /// Recomputes the face normals after the vertex positions changed.
    ///
    /// The positions must be an affine image of the ones used at construction
    /// (e.g. after a non-uniform scaling) so faces stay planar.
    pub fn recompute_normals(&mut self, points: &[Point<Real>]) {
        for face in &mut self.faces {
            if let Some(normal) = utils::ccw_polygon_normal(points, face.vertices.iter().copied())
            {
                face.normal = normal;
            }
        }
    }

    /// Checks the topological invariants of this structure.
    ///
    /// Every half-edge must be the twin of its twin, have a twin with swapped
    /// endpoints, and walking `next` around a face must come back to its first
    /// half-edge after exactly as many steps as the face has vertices.
    pub fn check_invariants(&self) -> bool {
        for (i, edge) in self.half_edges.iter().enumerate() {
            let i = i as u32;
            let twin = self.half_edge(edge.twin);

            if edge.twin == i
                || twin.twin != i
                || twin.origin != self.destination(i)
                || self.destination(edge.twin) != edge.origin
            {
                return false;
            }
        }

        for (fid, face) in self.faces.iter().enumerate() {
            let mut eid = face.first_half_edge;
            for k in 0..face.vertices.len() {
                let edge = self.half_edge(eid);
                if edge.face != fid as u32 || edge.origin != face.vertices[k] {
                    return false;
                }
                eid = edge.next;
            }

            if eid != face.first_half_edge {
                return false;
            }
        }

        true
    }
}

fn centroid(points: &[Point<Real>]) -> Point<Real> {
    let sum = points
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
    Point::from(sum / points.len() as Real)
}

fn face_centroid(points: &[Point<Real>], ids: &[u32]) -> Point<Real> {
    let sum = ids
        .iter()
        .fold(Vector::zeros(), |acc, id| acc + points[*id as usize].coords);
    Point::from(sum / ids.len() as Real)
}
