#![allow(clippy::unnecessary_cast)]

use cgmath::{Point3, Vector2, Vector3};

use crate::float::Float;

/// Conversion of camera math types into the raw arrays uploaded as uniforms
pub trait IntoArray<T> {
    fn into_array(self) -> T;
}

impl IntoArray<[f32; 3]> for Vector3<Float> {
    fn into_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl IntoArray<[f32; 3]> for Point3<Float> {
    fn into_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl IntoArray<[f32; 2]> for Vector2<Float> {
    fn into_array(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_keep_component_order() {
        let v = Vector3::new(1.0, -2.5, 3.25);
        assert_eq!(v.into_array(), [1.0f32, -2.5, 3.25]);
        let p = Point3::new(0.0, 0.0, -7.0);
        assert_eq!(p.into_array(), [0.0f32, 0.0, -7.0]);
        assert_eq!(Vector2::new(1.5, 1.0).into_array(), [1.5f32, 1.0]);
    }
}
