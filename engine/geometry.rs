use std::mem::size_of;
use bytemuck::{Pod, Zeroable};
use glow::HasContext;
use thiserror::Error;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
	pub position: [f32; 3],
	pub color: [f32; 3]
}

impl Vertex {
	const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
		Self { position, color }
	}
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

pub const VERTICES: [Vertex; 6] = [
	// Near, z = 0.0
	Vertex::new([-0.5, -0.5, 0.0], RED),
	Vertex::new([ 0.5, -0.5, 0.0], RED),
	Vertex::new([ 0.0,  0.5, 0.0], RED),

	// Far, z = 0.5
	Vertex::new([-0.2, -0.2, 0.5], BLUE),
	Vertex::new([ 0.8, -0.2, 0.5], BLUE),
	Vertex::new([ 0.3,  0.8, 0.5], BLUE)
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Triangle {
	Near,
	Far
}

impl Triangle {
	pub fn first_vertex(self) -> i32 {
		match self {
			Triangle::Near => 0,
			Triangle::Far => 3
		}
	}

	pub fn vertex_count(self) -> i32 {
		3
	}

	pub fn vertices(self) -> &'static [Vertex] {
		let first = self.first_vertex() as usize;
		&VERTICES[first..first + self.vertex_count() as usize]
	}
}

#[derive(Debug, Error)]
pub enum GeometryError {
	#[error("failed to create vertex array: {0}")]
	VertexArray(String),
	#[error("failed to create vertex buffer: {0}")]
	Buffer(String)
}

/// The uploaded vertex array and the buffer backing it.
pub struct GeometryBuffer {
	pub vertex_array: glow::VertexArray,
	pub buffer: glow::Buffer
}

impl GeometryBuffer {
	pub fn new(gl: &glow::Context) -> Result<Self, GeometryError> {
		let stride = size_of::<Vertex>() as i32;
		let color_offset = size_of::<[f32; 3]>() as i32;

		unsafe {
			let vertex_array = gl.create_vertex_array().map_err(GeometryError::VertexArray)?;
			let buffer = match gl.create_buffer() {
				Ok(buffer) => buffer,
				Err(e) => {
					gl.delete_vertex_array(vertex_array);
					return Err(GeometryError::Buffer(e));
				}
			};

			gl.bind_vertex_array(Some(vertex_array));
			gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
			gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(&VERTICES), glow::STATIC_DRAW);

			gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
			gl.enable_vertex_attrib_array(0);

			gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, color_offset);
			gl.enable_vertex_attrib_array(1);

			gl.bind_vertex_array(None);
			gl.bind_buffer(glow::ARRAY_BUFFER, None);

			Ok(Self { vertex_array, buffer })
		}
	}

	pub fn destroy(&self, gl: &glow::Context) {
		unsafe {
			gl.delete_vertex_array(self.vertex_array);
			gl.delete_buffer(self.buffer);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vertex_layout() {
		assert_eq!(size_of::<Vertex>(), 6 * size_of::<f32>());
		assert_eq!(bytemuck::cast_slice::<Vertex, f32>(&VERTICES).len(), 36);
	}

	#[test]
	fn triangle_ranges() {
		assert_eq!(Triangle::Near.vertices(), &VERTICES[0..3]);
		assert_eq!(Triangle::Far.vertices(), &VERTICES[3..6]);
	}

	#[test]
	fn far_triangle_is_deeper() {
		let near_depth = Triangle::Near.vertices().iter().map(|v| v.position[2]).fold(f32::NEG_INFINITY, f32::max);
		let far_depth = Triangle::Far.vertices().iter().map(|v| v.position[2]).fold(f32::INFINITY, f32::min);
		assert!(far_depth > near_depth);
	}

	#[test]
	fn triangles_are_flat_colored() {
		assert!(Triangle::Near.vertices().iter().all(|v| v.color == RED));
		assert!(Triangle::Far.vertices().iter().all(|v| v.color == BLUE));
	}
}
