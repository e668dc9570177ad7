use std::process;
use anyhow::Context as _;
use engine::{
	config::WindowConfig,
	logging::{self, LoggingConfig},
	InputState,
	RasterMode,
	Renderer,
	Window
};

fn run() -> anyhow::Result<()> {
	let config = WindowConfig::default();
	let mut window = Window::new(&config).context("Window creation failed")?;

	let gl = window.load_gl();
	let (width, height) = window.framebuffer_size();
	let mut renderer = Renderer::new(gl, width, height).context("Renderer creation failed")?;

	let mut state = InputState::default();
	let mut raster_mode = RasterMode::default();

	window.main_loop(|keys, resized| {
		if let Some((width, height)) = resized {
			renderer.resize(width, height);
		}

		raster_mode = raster_mode.update(keys);
		renderer.set_raster_mode(raster_mode);

		state = state.update(keys);
		renderer.render(&state);
	});

	log::info!("Window closed, shutting down");
	Ok(())
}

fn main() {
	logging::init_logging(LoggingConfig::default());

	if let Err(e) = run() {
		log::error!("{:#}", e);
		process::exit(-1);
	}
}
