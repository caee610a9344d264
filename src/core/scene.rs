use super::color::Rgb;
use super::constants::{DEPTH_FAR, DEPTH_NEAR};
use super::geometry::Mesh;
use glam::{EulerRot, Mat4, Vec3};

/// Surface appearance of a mesh object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub wireframe: bool,
}

/// Which primitive a mesh was built from; kept for logging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        radial_segments: u32,
        ring_segments: u32,
        theta_start: f32,
        theta_length: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
}

#[derive(Clone, Debug)]
pub enum ObjectKind {
    Mesh {
        primitive: Primitive,
        mesh: Mesh,
        material: Material,
    },
    Group(Vec<SceneObject>),
}

/// A renderable primitive or a group of them.
///
/// Rotation is Euler XYZ in radians. `speed_z` is the per-frame depth
/// displacement at playback speed 1.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub position: Vec3,
    pub rotation: Vec3,
    pub speed_z: i32,
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn mesh(primitive: Primitive, mesh: Mesh, material: Material) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            speed_z: 0,
            kind: ObjectKind::Mesh {
                primitive,
                mesh,
                material,
            },
        }
    }

    pub fn group(children: Vec<SceneObject>) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            speed_z: 0,
            kind: ObjectKind::Group(children),
        }
    }

    pub fn children(&self) -> &[SceneObject] {
        match &self.kind {
            ObjectKind::Group(children) => children,
            ObjectKind::Mesh { .. } => &[],
        }
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            ObjectKind::Mesh { material, .. } => Some(material),
            ObjectKind::Group(_) => None,
        }
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        match &self.kind {
            ObjectKind::Mesh { primitive, .. } => Some(primitive),
            ObjectKind::Group(_) => None,
        }
    }

    /// Depth-update rule, applied once per frame to top-level objects.
    ///
    /// An object that went past the near bound on the previous step wraps to
    /// the far bound; otherwise it moves `speed_z * playback_speed` toward
    /// the camera.
    pub fn advance_depth(&mut self, playback_speed: f32) {
        if self.position.z > DEPTH_NEAR {
            self.position.z = DEPTH_FAR;
        } else {
            self.position.z += self.speed_z as f32 * playback_speed;
        }
    }

    /// Recolor this object and every descendant.
    pub fn set_color(&mut self, color: Rgb) {
        match &mut self.kind {
            ObjectKind::Mesh { material, .. } => material.color = color,
            ObjectKind::Group(children) => {
                for c in children {
                    c.set_color(color);
                }
            }
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Number of mesh leaves under (and including) this object.
    pub fn mesh_count(&self) -> usize {
        match &self.kind {
            ObjectKind::Mesh { .. } => 1,
            ObjectKind::Group(children) => children.iter().map(SceneObject::mesh_count).sum(),
        }
    }

    fn flatten_into(&self, parent: Mat4, out: &mut FlatScene) {
        let world = parent * self.local_matrix();
        match &self.kind {
            ObjectKind::Group(children) => {
                for c in children {
                    c.flatten_into(world, out);
                }
            }
            ObjectKind::Mesh { mesh, material, .. } => {
                let base = out.vertices.len() as u32;
                out.vertices.extend(mesh.positions.iter().map(|p| SceneVertex {
                    position: world.transform_point3(*p).to_array(),
                    color: material.color,
                }));
                let (src, dst) = if material.wireframe {
                    (&mesh.edges, &mut out.line_indices)
                } else {
                    (&mesh.triangles, &mut out.triangle_indices)
                };
                dst.extend(src.iter().map(|i| base + i));
            }
        }
    }
}

/// World-space vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// One frame's worth of geometry, ready for upload.
#[derive(Clone, Debug, Default)]
pub struct FlatScene {
    pub vertices: Vec<SceneVertex>,
    pub triangle_indices: Vec<u32>,
    pub line_indices: Vec<u32>,
}

impl FlatScene {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangle_indices.clear();
        self.line_indices.clear();
    }
}

/// Retained scene: background plus ordered top-level objects.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub background: Rgb,
    children: Vec<SceneObject>,
}

impl Scene {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, object: SceneObject) -> usize {
        self.children.push(object);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SceneObject] {
        &mut self.children
    }

    /// Apply the depth-update rule to every direct child.
    pub fn advance_depths(&mut self, playback_speed: f32) {
        for c in &mut self.children {
            c.advance_depth(playback_speed);
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        for c in &mut self.children {
            c.set_color(color);
        }
    }

    /// Flatten into `out` (cleared first) with world transforms applied.
    pub fn flatten_into(&self, out: &mut FlatScene) {
        out.clear();
        for c in &self.children {
            c.flatten_into(Mat4::IDENTITY, out);
        }
    }

    pub fn flatten(&self) -> FlatScene {
        let mut out = FlatScene::default();
        self.flatten_into(&mut out);
        out
    }
}
