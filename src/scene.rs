//! Scene contents: model geometry, its transform, lights and the screen plane.

use std::f32::consts::PI;

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::config::ModelConfig;
use crate::error::{PortfolioError, Result};

/// Placement of the loaded model. Interaction writes rotation; nothing else
/// touches the model after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub scale: f32,
}

impl ModelTransform {
    pub fn from_config(cfg: &ModelConfig) -> Self {
        Self {
            position: Vec3::from_array(cfg.position),
            rotation: Vec3::from_array(cfg.rotation),
            scale: cfg.scale,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from, toward the origin.
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lights {
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    pub main: DirectionalLight,
    pub fill: DirectionalLight,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::ONE,
            ambient_intensity: 0.6,
            main: DirectionalLight {
                position: Vec3::new(5.0, 8.0, 5.0),
                color: Vec3::ONE,
                intensity: 1.2,
            },
            fill: DirectionalLight {
                position: Vec3::new(-5.0, 2.0, 3.0),
                color: rgb(0x88, 0x88, 0xff),
                intensity: 0.4,
            },
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
}

/// Flat quad the screen texture is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPlane {
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    pub rotation_y: f32,
}

impl Default for ScreenPlane {
    fn default() -> Self {
        Self {
            width: 1.8,
            height: 1.2,
            position: Vec3::new(0.0, 0.2, 2.5),
            rotation_y: PI,
        }
    }
}

impl ScreenPlane {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.position)
    }

    /// Interleaved `[x, y, z, u, v]` for two triangles, centered on the origin.
    pub fn vertices(&self) -> [f32; 30] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        #[rustfmt::skip]
        let v = [
            -hw, -hh, 0.0, 0.0, 1.0,
             hw, -hh, 0.0, 1.0, 1.0,
             hw,  hh, 0.0, 1.0, 0.0,
            -hw, -hh, 0.0, 0.0, 1.0,
             hw,  hh, 0.0, 1.0, 0.0,
            -hw,  hh, 0.0, 0.0, 0.0,
        ];
        v
    }
}

/// One draw call's worth of geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

/// Loaded model geometry with node transforms already applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub primitives: Vec<Primitive>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.indices.len() / 3).sum()
    }
}

/// Parse a binary glTF (`.glb`) into baked triangle geometry.
///
/// Only the embedded binary chunk is read; external buffer URIs are skipped.
pub fn mesh_from_glb(bytes: &[u8]) -> Result<MeshData> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();

    let mut mesh = MeshData::default();
    let roots: Vec<gltf::Node<'_>> = match gltf.default_scene().or_else(|| gltf.scenes().next()) {
        Some(scene) => scene.nodes().collect(),
        None => gltf.nodes().collect(),
    };
    for node in roots {
        collect_node(&node, Mat4::IDENTITY, blob, &mut mesh);
    }

    if mesh.triangle_count() == 0 {
        return Err(PortfolioError::EmptyModel);
    }
    log::debug!(
        "parsed model: {} primitives, {} triangles",
        mesh.primitives.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

fn collect_node(node: &gltf::Node<'_>, parent: Mat4, blob: Option<&[u8]>, out: &mut MeshData) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => blob,
                gltf::buffer::Source::Uri(_) => None,
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions
                .map(|p| world.transform_point3(Vec3::from_array(p)).to_array())
                .collect();
            let normals: Vec<[f32; 3]> = match reader.read_normals() {
                Some(n) => n
                    .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero().to_array())
                    .collect(),
                None => vec![[0.0, 1.0, 0.0]; positions.len()],
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(i) => i.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            out.primitives.push(Primitive {
                positions,
                normals,
                indices,
                base_color: primitive
                    .material()
                    .pbr_metallic_roughness()
                    .base_color_factor(),
            });
        }
    }

    for child in node.children() {
        collect_node(&child, world, blob, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = mesh_from_glb(b"definitely not a glb").unwrap_err();
        assert!(matches!(err, PortfolioError::ModelParse(_)));
    }

    #[test]
    fn default_transform_matches_config() {
        let t = ModelTransform::default();
        assert_eq!(t.scale, 1.2);
        assert_eq!(t.position, Vec3::new(0.0, -1.2, 0.0));
        assert_eq!(t.rotation.y, -0.3);
    }

    #[test]
    fn screen_plane_faces_back_toward_model() {
        let plane = ScreenPlane::default();
        let normal = plane.matrix().transform_vector3(Vec3::Z);
        assert!((normal - Vec3::NEG_Z).length() < 1e-5);
    }
}
