use glow::HasContext;
use thiserror::Error;

pub const VERTEX_SOURCE: &str = include_str!("shaders/triangle.vert");
pub const FRAGMENT_SOURCE: &str = include_str!("shaders/triangle.frag");

#[derive(Debug, Error)]
pub enum ShaderError {
	#[error("failed to create {stage} shader: {log}")]
	Create { stage: &'static str, log: String },
	#[error("{stage} shader failed to compile:\n{log}")]
	Compile { stage: &'static str, log: String },
	#[error("failed to create program: {0}")]
	CreateProgram(String),
	#[error("program failed to link:\n{0}")]
	Link(String),
	#[error("uniform {0} is not active in the linked program")]
	MissingUniform(&'static str)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Uniform {
	Offset,
	Alpha
}

impl Uniform {
	pub const ALL: [Uniform; 2] = [Uniform::Offset, Uniform::Alpha];

	pub fn name(self) -> &'static str {
		match self {
			Uniform::Offset => "uOffset",
			Uniform::Alpha => "uAlpha"
		}
	}
}

/// Prefixes each source line with its number and appends the driver log, so
/// the line references in the log can be matched up.
pub fn annotate_source(source: &str, log: &str) -> String {
	let line_count = source.lines().count();
	let width = line_count.to_string().len();

	let mut annotated = String::new();
	for (i, line) in source.lines().enumerate() {
		annotated.push_str(&format!("{:>width$}: {}\n", i + 1, line, width = width));
	}

	if annotated.is_empty() {
		return log.trim_end().to_owned();
	}

	if !log.trim().is_empty() {
		annotated.push('\n');
		annotated.push_str(log.trim_end());
	}

	annotated.trim_end().to_owned()
}

fn stage_name(shader_type: u32) -> &'static str {
	match shader_type {
		glow::VERTEX_SHADER => "vertex",
		glow::FRAGMENT_SHADER => "fragment",
		_ => "unknown"
	}
}

fn compile(gl: &glow::Context, shader_type: u32, source: &str) -> Result<glow::Shader, ShaderError> {
	let stage = stage_name(shader_type);

	unsafe {
		let shader = gl.create_shader(shader_type).map_err(|log| ShaderError::Create { stage, log })?;
		gl.shader_source(shader, source);
		gl.compile_shader(shader);

		if gl.get_shader_compile_status(shader) {
			Ok(shader)
		}
		else {
			let log = annotate_source(source, &gl.get_shader_info_log(shader));
			gl.delete_shader(shader);
			Err(ShaderError::Compile { stage, log })
		}
	}
}

fn link(gl: &glow::Context, vertex_shader: glow::Shader, fragment_shader: glow::Shader) -> Result<glow::Program, ShaderError> {
	unsafe {
		let program = gl.create_program().map_err(ShaderError::CreateProgram)?;
		gl.attach_shader(program, vertex_shader);
		gl.attach_shader(program, fragment_shader);
		gl.link_program(program);
		gl.detach_shader(program, vertex_shader);
		gl.detach_shader(program, fragment_shader);

		if gl.get_program_link_status(program) {
			Ok(program)
		}
		else {
			let log = gl.get_program_info_log(program);
			gl.delete_program(program);
			Err(ShaderError::Link(log))
		}
	}
}

/// A linked vertex/fragment pair with its uniform locations resolved up front.
pub struct ShaderProgram {
	pub handle: glow::Program,
	locations: [glow::UniformLocation; 2]
}

impl ShaderProgram {
	pub fn new(gl: &glow::Context, vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
		let vertex_shader = compile(gl, glow::VERTEX_SHADER, vertex_source)?;
		let fragment_shader = match compile(gl, glow::FRAGMENT_SHADER, fragment_source) {
			Ok(shader) => shader,
			Err(e) => {
				unsafe { gl.delete_shader(vertex_shader) };
				return Err(e);
			}
		};

		let linked = link(gl, vertex_shader, fragment_shader);

		unsafe {
			gl.delete_shader(vertex_shader);
			gl.delete_shader(fragment_shader);
		}

		let handle = linked?;

		let locate = |uniform: Uniform| unsafe {
			gl.get_uniform_location(handle, uniform.name()).ok_or(ShaderError::MissingUniform(uniform.name()))
		};

		let locations = match (locate(Uniform::Offset), locate(Uniform::Alpha)) {
			(Ok(offset), Ok(alpha)) => [offset, alpha],
			(Err(e), _) | (_, Err(e)) => {
				unsafe { gl.delete_program(handle) };
				return Err(e);
			}
		};

		Ok(Self { handle, locations })
	}

	pub fn location(&self, uniform: Uniform) -> &glow::UniformLocation {
		&self.locations[uniform as usize]
	}

	pub fn set_f32(&self, gl: &glow::Context, uniform: Uniform, value: f32) {
		unsafe { gl.uniform_1_f32(Some(self.location(uniform)), value) };
	}

	pub fn destroy(&self, gl: &glow::Context) {
		unsafe { gl.delete_program(self.handle) };
	}
}
