//! Strip-/Ribbon-Mesh-Builder: Straßenbelag, Bankette, Leitplanken, Fahrbahnlinien.
//!
//! Alle Builder erzeugen das Mesh bei jedem Aufruf komplett neu (kein
//! inkrementelles Patchen). Wicklungskonvention: Vorderseiten gegen den
//! Uhrzeigersinn, Normale = (b − a) × (c − a). Ungeflippte Strips zeigen nach +Y.

use super::offset::tangents;
use crate::shared::spline_geometry::{accumulated_distances, lateral_right, WORLD_UP};
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Wandstärke der Leitplanken-Wände in Welteinheiten.
pub const WALL_THICKNESS: f32 = 0.1;

/// Interleaved Vertex für den Upload in Host-/GPU-Buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position im Weltraum
    pub position: [f32; 3],
    /// Textur-Koordinate
    pub uv: [f32; 2],
}

/// Dreiecks-Mesh aus Vertex-, UV- und Index-Buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StripMesh {
    /// Vertex-Positionen
    pub vertices: Vec<Vec3>,
    /// UVs (gleiche Länge wie `vertices`)
    pub uvs: Vec<Vec2>,
    /// Dreiecks-Indizes, je 3 pro Dreieck
    pub triangles: Vec<u32>,
}

impl StripMesh {
    /// Leeres Mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` wenn das Mesh keine Vertices enthält.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Leert alle Buffer.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.triangles.clear();
    }

    /// Hängt ein weiteres Mesh an (Indizes werden verschoben).
    pub fn append(&mut self, other: &StripMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.uvs.extend_from_slice(&other.uvs);
        self.triangles
            .extend(other.triangles.iter().map(|&i| i + base));
    }

    /// Achsenparallele Bounding-Box `(min, max)`, `None` bei leerem Mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Flächengewichtete Vertex-Normalen.
    pub fn recalculate_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.triangles.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        normals.iter().map(|n| n.normalize_or_zero()).collect()
    }

    /// Interleaved Vertex-Buffer für den Host.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .map(|(p, uv)| MeshVertex {
                position: p.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Index-Buffer als Bytes (u32, native Endianness).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Fügt ein Quad als zwei Dreiecke ein, ausgerichtet auf die Außennormale `outward`.
    fn push_quad(&mut self, corners: [Vec3; 4], uvs: [Vec2; 4], outward: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&uvs);

        let face = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
        if face.dot(outward) >= 0.0 {
            self.triangles
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            self.triangles
                .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }
}

/// Seite relativ zur Fahrtrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Links (−right)
    Left,
    /// Rechts (+right)
    Right,
}

impl Side {
    /// Vorzeichen für seitliche Offsets (+1 rechts, −1 links).
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// UV-Kachelung: V entlang der Bogenlänge, U quer zur Fahrbahn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripTiling {
    /// Faktor auf die kumulierte Bogenlänge (V)
    pub density: f32,
    /// Skalierung der U-Koordinate über die Breite
    pub width_scale: f32,
}

impl Default for StripTiling {
    fn default() -> Self {
        Self {
            density: 0.5,
            width_scale: 1.0,
        }
    }
}

/// Spalten pro Querschnitt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripColumns {
    /// Links / Mitte / Rechts (Straßenbelag)
    Three,
    /// Links / Rechts (einfache Bänder)
    Two,
}

impl StripColumns {
    fn count(self) -> usize {
        match self {
            StripColumns::Three => 3,
            StripColumns::Two => 2,
        }
    }
}

/// Parameter für `build_strip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripParams {
    /// Gesamtbreite quer zur Fahrtrichtung
    pub width: f32,
    /// Vertikaler Versatz aller Vertices
    pub height_offset: f32,
    /// UV-Kachelung
    pub tiling: StripTiling,
    /// Wicklung umkehren (Normalen nach unten)
    pub flip_normals: bool,
    /// Spalten pro Querschnitt
    pub columns: StripColumns,
}

/// Parameter für Bankett-Streifen neben der Fahrbahn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoulderParams {
    /// Breite der Fahrbahn (Bankett beginnt an deren Kante)
    pub road_width: f32,
    /// Breite des Banketts
    pub size: f32,
    /// Vertikaler Versatz der Fahrbahn
    pub height_offset: f32,
    /// Zusätzlicher vertikaler Versatz der Außenkante
    pub outer_height_offset: f32,
    /// Horizontale UV-Kachelung
    pub uv_horizontal_tile: f32,
    /// V-Dichte entlang der Bogenlänge
    pub uv_density: f32,
}

/// Querschnitts-Basis pro Punkt: (Position inkl. Höhenversatz, rechts-Vektor).
fn cross_sections(points: &[Vec3], height_offset: f32) -> Vec<(Vec3, Vec3)> {
    points
        .iter()
        .zip(tangents(points))
        .map(|(p, t)| (*p + WORLD_UP * height_offset, lateral_right(t)))
        .collect()
}

/// Baut einen Strip entlang der Polyline.
///
/// Drei Spalten: UV-U = `width_scale`, `width_scale / 2`, `0` (links → rechts).
/// Zwei Spalten: UV-U = `0`, `width_scale`. Weniger als 2 Punkte → leeres Mesh.
pub fn build_strip(points: &[Vec3], params: &StripParams) -> StripMesh {
    let count = points.len();
    if count < 2 {
        return StripMesh::new();
    }

    let columns = params.columns.count();
    let half = params.width * 0.5;
    let distances = accumulated_distances(points);
    let scale = params.tiling.width_scale;

    let mut mesh = StripMesh {
        vertices: Vec::with_capacity(count * columns),
        uvs: Vec::with_capacity(count * columns),
        triangles: Vec::with_capacity((count - 1) * (columns - 1) * 6),
    };

    for (i, (pos, right)) in cross_sections(points, params.height_offset)
        .into_iter()
        .enumerate()
    {
        let v = distances[i] * params.tiling.density;
        let left = pos - right * half;
        let right_edge = pos + right * half;
        match params.columns {
            StripColumns::Three => {
                mesh.vertices.extend_from_slice(&[left, pos, right_edge]);
                mesh.uvs.extend_from_slice(&[
                    Vec2::new(scale, v),
                    Vec2::new(scale * 0.5, v),
                    Vec2::new(0.0, v),
                ]);
            }
            StripColumns::Two => {
                mesh.vertices.extend_from_slice(&[left, right_edge]);
                mesh.uvs
                    .extend_from_slice(&[Vec2::new(0.0, v), Vec2::new(scale, v)]);
            }
        }
    }

    let columns = columns as u32;
    for i in 0..(count as u32 - 1) {
        let row = i * columns;
        let next = row + columns;
        // Ein Teil-Streifen pro benachbartem Spaltenpaar
        for c in 0..(columns - 1) {
            let (a, b, c_next, d) = (row + c, row + c + 1, next + c, next + c + 1);
            if params.flip_normals {
                mesh.triangles.extend_from_slice(&[a, c_next, b, b, c_next, d]);
            } else {
                mesh.triangles.extend_from_slice(&[a, b, c_next, b, d, c_next]);
            }
        }
    }

    mesh
}

/// Baut ein Bankett außerhalb der Fahrbahnkante auf der angegebenen Seite.
///
/// Die Außenkante wird um `outer_height_offset` abgesenkt; UV-U ist je Seite
/// gespiegelt, damit die Textur außen an beiden Seiten gleich ausläuft.
pub fn build_shoulder(points: &[Vec3], params: &ShoulderParams, side: Side) -> StripMesh {
    let count = points.len();
    if count < 2 {
        return StripMesh::new();
    }

    let distances = accumulated_distances(points);
    let half = params.road_width * 0.5;
    let tile = params.uv_horizontal_tile;
    let mut mesh = StripMesh {
        vertices: Vec::with_capacity(count * 2),
        uvs: Vec::with_capacity(count * 2),
        triangles: Vec::with_capacity((count - 1) * 6),
    };

    for (i, (pos, right)) in cross_sections(points, params.height_offset)
        .into_iter()
        .enumerate()
    {
        let v = distances[i] * params.uv_density;
        let edge = pos + right * (half * side.sign());
        let outer = edge + right * (params.size * side.sign()) + WORLD_UP * params.outer_height_offset;
        // Spalten immer von links nach rechts, damit die Wicklung nach oben zeigt
        match side {
            Side::Left => {
                mesh.vertices.extend_from_slice(&[outer, edge]);
                mesh.uvs
                    .extend_from_slice(&[Vec2::new(tile, v), Vec2::new(0.0, v)]);
            }
            Side::Right => {
                mesh.vertices.extend_from_slice(&[edge, outer]);
                mesh.uvs
                    .extend_from_slice(&[Vec2::new(0.0, v), Vec2::new(tile, v)]);
            }
        }
    }

    for i in 0..(count as u32 - 1) {
        let (a, b, c, d) = (i * 2, i * 2 + 1, (i + 1) * 2, (i + 1) * 2 + 1);
        mesh.triangles.extend_from_slice(&[a, b, c, b, d, c]);
    }

    mesh
}

/// Baut vertikale Leitplanken-Flächen: ein Quad pro Segment.
///
/// `points` ist bereits der seitlich versetzte Pfad. Dreiecks-Reihenfolge und
/// UV-Laufrichtung hängen von `side` ab, damit die Normale vom Pfad weg zeigt.
pub fn build_railing_planes(
    points: &[Vec3],
    side: Side,
    height: f32,
    uv_repeat_factor: f32,
) -> StripMesh {
    let mut mesh = StripMesh::new();
    if points.len() < 2 {
        return mesh;
    }
    let up = WORLD_UP * height;

    for seg in points.windows(2) {
        let (start, end) = (seg[0], seg[1]);
        let length = start.distance(end);
        if length <= f32::EPSILON {
            log::debug!("Leitplanken-Segment mit Länge 0 übersprungen");
            continue;
        }
        let repeat = uv_repeat(length, uv_repeat_factor);
        let base = mesh.vertices.len() as u32;
        mesh.vertices
            .extend_from_slice(&[start, end, start + up, end + up]);

        match side {
            Side::Right => {
                mesh.uvs.extend_from_slice(&[
                    Vec2::new(repeat, 0.0),
                    Vec2::new(0.0, 0.0),
                    Vec2::new(repeat, 1.0),
                    Vec2::new(0.0, 1.0),
                ]);
                mesh.triangles.extend_from_slice(&[
                    base,
                    base + 1,
                    base + 2,
                    base + 1,
                    base + 3,
                    base + 2,
                ]);
            }
            Side::Left => {
                mesh.uvs.extend_from_slice(&[
                    Vec2::new(0.0, 0.0),
                    Vec2::new(repeat, 0.0),
                    Vec2::new(0.0, 1.0),
                    Vec2::new(repeat, 1.0),
                ]);
                mesh.triangles.extend_from_slice(&[
                    base,
                    base + 2,
                    base + 1,
                    base + 1,
                    base + 2,
                    base + 3,
                ]);
            }
        }
    }

    mesh
}

/// Baut Leitplanken-Wände: ein schmaler Quader pro Segment, Unterkante auf Pfadhöhe.
pub fn build_railing_walls(points: &[Vec3], height: f32, uv_repeat_factor: f32) -> StripMesh {
    let mut mesh = StripMesh::new();
    if points.len() < 2 {
        return mesh;
    }
    let half_thickness = WALL_THICKNESS * 0.5;
    let up = WORLD_UP * height;

    for seg in points.windows(2) {
        let (start, end) = (seg[0], seg[1]);
        let Some(forward) = (end - start).try_normalize() else {
            log::debug!("Wand-Segment mit Länge 0 übersprungen");
            continue;
        };
        let right = lateral_right(forward);
        let n = right * half_thickness;
        let repeat = uv_repeat(start.distance(end), uv_repeat_factor);

        let (sl, sr, el, er) = (start - n, start + n, end - n, end + n);
        let along = [
            Vec2::new(0.0, 0.0),
            Vec2::new(repeat, 0.0),
            Vec2::new(repeat, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let cap = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];

        mesh.push_quad([sr, er, er + up, sr + up], along, right);
        mesh.push_quad([el, sl, sl + up, el + up], along, -right);
        mesh.push_quad([sl + up, sr + up, er + up, el + up], along, WORLD_UP);
        mesh.push_quad([sl, el, er, sr], along, -WORLD_UP);
        mesh.push_quad([sl, sr, sr + up, sl + up], cap, -forward);
        mesh.push_quad([er, el, el + up, er + up], cap, forward);
    }

    mesh
}

/// Anzahl Textur-Wiederholungen über eine Segmentlänge.
fn uv_repeat(length: f32, uv_repeat_factor: f32) -> f32 {
    if uv_repeat_factor.abs() <= f32::EPSILON {
        length
    } else {
        length / uv_repeat_factor
    }
}
