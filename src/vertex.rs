use glium::implement_vertex;

/// Vertex of the fullscreen quad, already in clip space
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, Default)]
pub struct QuadVertex {
    pub vPos: [f32; 3],
}

implement_vertex!(QuadVertex, vPos);

/// Corners of the quad covering the whole viewport
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { vPos: [-1.0, -1.0, 0.0] },
    QuadVertex { vPos: [1.0, -1.0, 0.0] },
    QuadVertex { vPos: [1.0, 1.0, 0.0] },
    QuadVertex { vPos: [-1.0, 1.0, 0.0] },
];

/// Two counter-clockwise triangles over the quad corners
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_clip_space() {
        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.vPos[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.vPos[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.0);
    }

    #[test]
    fn indices_reference_all_corners() {
        for i in 0..QUAD_VERTICES.len() as u16 {
            assert!(QUAD_INDICES.contains(&i));
        }
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
