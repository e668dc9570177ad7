//! Per-frame draw ordering.
//!
//! Source-over blending is order dependent: a translucent triangle only
//! composites correctly against what is already in the framebuffer. The depth
//! test rejects hidden fragments but never reorders blend contributions, so
//! every opaque draw is issued before any draw that uses the live alpha.

use crate::{config::CLEAR_COLOR, geometry::Triangle, input::InputState, shader::Uniform};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
	Clear([f32; 4]),
	Bind,
	SetUniform(Uniform, f32),
	Draw(Triangle)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pass {
	Opaque,
	Blended
}

/// Draw order for the scene. Opaque entries must come first.
pub const PASSES: [(Pass, Triangle); 2] = [
	(Pass::Opaque, Triangle::Far),
	(Pass::Blended, Triangle::Near)
];

pub fn plan(state: &InputState) -> Vec<Command> {
	let mut commands = Vec::with_capacity(3 + PASSES.len() * 2);

	commands.push(Command::Clear(CLEAR_COLOR));
	commands.push(Command::Bind);
	commands.push(Command::SetUniform(Uniform::Offset, state.offset));

	for &(pass, triangle) in PASSES.iter() {
		let alpha = match pass {
			Pass::Opaque => 1.0,
			Pass::Blended => state.alpha
		};

		commands.push(Command::SetUniform(Uniform::Alpha, alpha));
		commands.push(Command::Draw(triangle));
	}

	commands
}
