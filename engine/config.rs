pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

pub struct WindowConfig {
	pub width: u32,
	pub height: u32,
	pub title: &'static str,
	pub gl_version: (u32, u32),
	pub forward_compat: bool,
	pub vsync: bool
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			width: 800,
			height: 600,
			title: "Lab: Shapes, Depth, & Transparency",
			gl_version: (3, 3),
			forward_compat: true,
			vsync: true
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_window() {
		let config = WindowConfig::default();
		assert_eq!((config.width, config.height), (800, 600));
		assert!(config.gl_version >= (3, 3));
		assert!(config.forward_compat);
	}
}
