use fnv::FnvHashSet;
use glam::{Mat3, Vec3};

/// CPU-side indexed mesh in local space.
///
/// `triangles` drives solid drawing, `edges` (pairs of indices, no
/// duplicates) drives wireframe drawing.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub edges: Vec<u32>,
}

impl Mesh {
    fn from_triangles(positions: Vec<Vec3>, triangles: Vec<u32>) -> Self {
        let edges = edges_from_triangles(&triangles);
        Self {
            positions,
            triangles,
            edges,
        }
    }

    /// Flat annulus (or annulus sector) in the XY plane.
    ///
    /// Segment counts are raised to the minimum a ring can be built with
    /// (3 around, 1 across). `outer_radius > inner_radius` is up to the caller.
    pub fn ring(
        inner_radius: f32,
        outer_radius: f32,
        radial_segments: u32,
        ring_segments: u32,
        theta_start: f32,
        theta_length: f32,
    ) -> Self {
        let around = radial_segments.max(3);
        let across = ring_segments.max(1);
        let mut positions = Vec::with_capacity(((around + 1) * (across + 1)) as usize);
        let step = (outer_radius - inner_radius) / across as f32;
        for j in 0..=across {
            let radius = inner_radius + step * j as f32;
            for i in 0..=around {
                let theta = theta_start + theta_length * i as f32 / around as f32;
                positions.push(Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0));
            }
        }
        let mut triangles = Vec::with_capacity((around * across * 6) as usize);
        for j in 0..across {
            let level = j * (around + 1);
            for i in 0..around {
                let a = level + i;
                let b = a + around + 1;
                let c = a + around + 2;
                let d = a + 1;
                triangles.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        Self::from_triangles(positions, triangles)
    }

    /// Rectangle in the XY plane centered on the origin.
    pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let gx = width_segments.max(1);
        let gy = height_segments.max(1);
        let seg_w = width / gx as f32;
        let seg_h = height / gy as f32;
        let mut positions = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
        for iy in 0..=gy {
            let y = height * 0.5 - iy as f32 * seg_h;
            for ix in 0..=gx {
                positions.push(Vec3::new(ix as f32 * seg_w - width * 0.5, y, 0.0));
            }
        }
        let row = gx + 1;
        let mut triangles = Vec::with_capacity((gx * gy * 6) as usize);
        for iy in 0..gy {
            for ix in 0..gx {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = ix + 1 + row * (iy + 1);
                let d = ix + 1 + row * iy;
                triangles.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        Self::from_triangles(positions, triangles)
    }

    /// Axis-aligned box centered on the origin.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
        let positions = vec![
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
            Vec3::new(-x, -y, -z),
            Vec3::new(x, -y, -z),
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
        ];
        #[rustfmt::skip]
        let triangles = vec![
            0, 1, 2, 0, 2, 3, // front
            5, 4, 7, 5, 7, 6, // back
            4, 0, 3, 4, 3, 7, // left
            1, 5, 6, 1, 6, 2, // right
            3, 2, 6, 3, 6, 7, // top
            4, 5, 1, 4, 1, 0, // bottom
        ];
        Self::from_triangles(positions, triangles)
    }

    /// Rotate every vertex about the X axis (radians).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        let m = Mat3::from_rotation_x(angle);
        for p in &mut self.positions {
            *p = m * *p;
        }
        self
    }

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

fn edges_from_triangles(triangles: &[u32]) -> Vec<u32> {
    let mut seen = FnvHashSet::default();
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                edges.push(a);
                edges.push(b);
            }
        }
    }
    edges
}
