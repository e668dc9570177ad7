use glow::HasContext;
use thiserror::Error;
use crate::{
	frame::{self, Command},
	geometry::{GeometryBuffer, GeometryError},
	input::{InputState, RasterMode},
	shader::{self, ShaderError, ShaderProgram}
};

#[derive(Debug, Error)]
pub enum RendererError {
	#[error(transparent)]
	Shader(#[from] ShaderError),
	#[error(transparent)]
	Geometry(#[from] GeometryError)
}

pub struct Renderer {
	gl: glow::Context,
	program: ShaderProgram,
	geometry: GeometryBuffer,
	raster_mode: RasterMode
}

impl Renderer {
	pub fn new(gl: glow::Context, width: i32, height: i32) -> Result<Self, RendererError> {
		unsafe {
			log::info!("GL vendor: {}", gl.get_parameter_string(glow::VENDOR));
			log::info!("GL renderer: {}", gl.get_parameter_string(glow::RENDERER));
			log::info!("GL version: {}", gl.get_parameter_string(glow::VERSION));

			gl.viewport(0, 0, width, height);
			gl.enable(glow::DEPTH_TEST);
			gl.enable(glow::BLEND);
			gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
		}

		let program = ShaderProgram::new(&gl, shader::VERTEX_SOURCE, shader::FRAGMENT_SOURCE)?;
		let geometry = match GeometryBuffer::new(&gl) {
			Ok(geometry) => geometry,
			Err(e) => {
				program.destroy(&gl);
				return Err(e.into());
			}
		};

		Ok(Self {
			gl,
			program,
			geometry,
			raster_mode: RasterMode::Fill
		})
	}

	pub fn resize(&mut self, width: i32, height: i32) {
		unsafe { self.gl.viewport(0, 0, width, height) };
	}

	pub fn raster_mode(&self) -> RasterMode {
		self.raster_mode
	}

	pub fn set_raster_mode(&mut self, mode: RasterMode) {
		if mode == self.raster_mode {
			return;
		}

		let polygon_mode = match mode {
			RasterMode::Fill => glow::FILL,
			RasterMode::Wireframe => glow::LINE
		};

		unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode) };
		self.raster_mode = mode;
		log::debug!("Raster mode set to {:?}", mode);
	}

	pub fn render(&mut self, state: &InputState) {
		for command in frame::plan(state) {
			self.execute(command);
		}
	}

	fn execute(&self, command: Command) {
		let gl = &self.gl;

		unsafe {
			match command {
				Command::Clear([r, g, b, a]) => {
					gl.clear_color(r, g, b, a);
					gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
				},
				Command::Bind => {
					gl.use_program(Some(self.program.handle));
					gl.bind_vertex_array(Some(self.geometry.vertex_array));
				},
				Command::SetUniform(uniform, value) => self.program.set_f32(gl, uniform, value),
				Command::Draw(triangle) => gl.draw_arrays(glow::TRIANGLES, triangle.first_vertex(), triangle.vertex_count())
			}
		}
	}
}

impl Drop for Renderer {
	fn drop(&mut self) {
		unsafe {
			self.gl.bind_vertex_array(None);
			self.gl.use_program(None);
		}

		self.geometry.destroy(&self.gl);
		self.program.destroy(&self.gl);
	}
}
