//! Camera descriptions used to project scene points into normalized device
//! coordinates.
//!
//! The AR renderer hands over raw matrices every frame ([`MatrixCamera`]);
//! [`Camera`] is a look-at description handy for fixed viewpoints and tests.

use glam::{Mat4, Vec3, Vec4};

/// Homogeneous `w` below this is treated as a point on the camera plane.
const MIN_CLIP_W: f32 = 1e-6;

/// World-space point to normalized device coordinates.
pub trait Projection {
    fn view_projection(&self) -> Mat4;

    /// Returns `None` when the point cannot be divided through (`w` ~ 0).
    fn project_ndc(&self, world: Vec3) -> Option<Vec3> {
        project_with(&self.view_projection(), world)
    }
}

#[inline]
pub fn project_with(view_projection: &Mat4, world: Vec3) -> Option<Vec3> {
    let clip = *view_projection * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w.abs() < MIN_CLIP_W {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Clip-space projection matrix with a [-1, 1] depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// View matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Projection for Camera {
    fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Matrices supplied by the rendering collaborator (three.js convention:
/// column-major, [-1, 1] depth).
#[derive(Clone, Copy, Debug)]
pub struct MatrixCamera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Projection for MatrixCamera {
    fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}
