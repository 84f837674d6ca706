//! Instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{Entity, Particle};

/// A textured quad: one paddle or the ball
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl From<&Entity> for QuadInstance {
    fn from(entity: &Entity) -> Self {
        Self {
            position: entity.position.to_array(),
            size: entity.size.to_array(),
            color: entity.color.extend(1.0).to_array(),
        }
    }
}

/// One trail particle, drawn with additive blending
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub offset: [f32; 2],
    pub color: [f32; 4],
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            offset: particle.position.to_array(),
            color: particle.color.to_array(),
        }
    }
}
