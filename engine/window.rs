use std::sync::mpsc::Receiver;
use glfw::Context as _;
use thiserror::Error;
use crate::{config::WindowConfig, input::Keys};

#[derive(Debug, Error)]
pub enum WindowError {
	#[error("failed to initialize GLFW: {0}")]
	Init(String),
	#[error("failed to create a {width}x{height} window with an OpenGL {major}.{minor} core context")]
	Create { width: u32, height: u32, major: u32, minor: u32 }
}

pub struct Window {
	pub glfw: glfw::Glfw,
	pub glfw_window: glfw::Window,
	pub events: Receiver<(f64, glfw::WindowEvent)>
}

impl Window {
	pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
		let mut glfw = glfw::init(glfw::LOG_ERRORS).map_err(|e| WindowError::Init(format!("{:?}", e)))?;

		let (major, minor) = config.gl_version;
		glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
		glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
		glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(config.forward_compat));

		let (mut glfw_window, events) = glfw.create_window(config.width, config.height, config.title, glfw::WindowMode::Windowed)
			.ok_or(WindowError::Create { width: config.width, height: config.height, major, minor })?;

		glfw_window.make_current();
		glfw_window.set_framebuffer_size_polling(true);

		if config.vsync {
			glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
		}

		Ok(Self {
			glfw,
			glfw_window,
			events
		})
	}

	/// Loads the GL function table for this window's context, which must be current.
	pub fn load_gl(&mut self) -> glow::Context {
		let glfw_window = &mut self.glfw_window;
		unsafe { glow::Context::from_loader_function(|name| glfw_window.get_proc_address(name) as *const _) }
	}

	pub fn framebuffer_size(&self) -> (i32, i32) {
		self.glfw_window.get_framebuffer_size()
	}

	/// Runs until the window is asked to close. `render` receives the keys held
	/// this frame and, when the framebuffer changed size, the new size. The
	/// frame is presented after `render` returns.
	pub fn main_loop<F>(&mut self, mut render: F) where
		F: FnMut(&Keys, Option<(i32, i32)>)
	{
		let mut keys = Keys::new();
		let mut minimized = false;
		let mut resized;

		while !self.glfw_window.should_close() {
			resized = None;
			self.glfw.poll_events();

			for (_, event) in glfw::flush_messages(&self.events) {
				if let glfw::WindowEvent::FramebufferSize(width, height) = event {
					if width == 0 && height == 0 {
						minimized = true;
					}
					else {
						minimized = false;
						resized = Some((width, height));
						log::debug!("Framebuffer resized to {}x{}", width, height);
					}
				}
			}

			if minimized {
				self.glfw.wait_events();
				continue;
			}

			keys.poll(&self.glfw_window);

			if keys.key_pressed(glfw::Key::Escape) {
				self.glfw_window.set_should_close(true);
			}

			render(&keys, resized);
			self.glfw_window.swap_buffers();
		}
	}
}
