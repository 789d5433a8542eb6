//! Scene container: shapes plus lights.

use crate::{AreaLight, Checkerboard, Color, IntersectionResult, Material, Ray, Shape, Torus};
use donut_math::Vec3;

/// An ordered list of shapes and area lights.
///
/// Built once, then only read while rendering.
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
    lights: Vec<AreaLight>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a shape to the scene.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: AreaLight) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[AreaLight] {
        &self.lights
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Closest valid intersection over all shapes.
    ///
    /// On exactly equal distances the shape added first wins.
    pub fn intersect(&self, ray: &Ray) -> IntersectionResult<'_> {
        let mut closest = IntersectionResult::MISS;

        for shape in &self.shapes {
            let hit = shape.intersect(ray);
            if hit.is_valid() && hit.distance < closest.distance {
                closest = hit;
            }
        }

        closest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Red torus floating over a black and white checkerboard floor, lit from
/// above and to the right.
pub fn reference_scene() -> Scene {
    let mut scene = Scene::new();

    let torus_material = Material::new(Color::splat(0.8), Color::ONE, Color::splat(0.1), 32.0);
    let floor_material =
        Material::new(Color::splat(0.8), Color::splat(0.3), Color::splat(0.1), 16.0);

    scene.add(Box::new(Torus::new(
        Vec3::new(0.0, 0.0, -3.0),
        0.8,
        0.2,
        torus_material,
        Color::new(0.7, 0.2, 0.2),
    )));

    scene.add(Box::new(Checkerboard::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        1.0,
        floor_material,
        Color::splat(0.9),
        Color::splat(0.1),
    )));

    scene.add_light(AreaLight::new(Vec3::new(3.0, 5.0, -4.0), 2.0, 16));

    scene
}
