use glfw::{Action, Key};

pub const OFFSET_STEP: f32 = 0.005;
pub const ALPHA_STEP: f32 = 0.005;

const WATCHED_KEYS: [Key; 7] = [
	Key::Escape,
	Key::W,
	Key::F,
	Key::Right,
	Key::Up,
	Key::Left,
	Key::Down
];

/// Keys held down during the current frame.
pub struct Keys {
	pressed_keys: Vec<Key>
}

impl Keys {
	pub fn new() -> Self {
		Self {
			pressed_keys: vec![]
		}
	}

	pub fn from_pressed(keys: &[Key]) -> Self {
		Self {
			pressed_keys: keys.to_vec()
		}
	}

	pub fn poll(&mut self, window: &glfw::Window) {
		self.pressed_keys.clear();

		for &key in WATCHED_KEYS.iter() {
			if window.get_key(key) == Action::Press {
				self.pressed_keys.push(key);
			}
		}
	}

	pub fn key_pressed(&self, key: Key) -> bool {
		self.pressed_keys.iter().any(|&k| k == key)
	}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputState {
	pub offset: f32,
	pub alpha: f32
}

impl InputState {
	pub fn new(offset: f32, alpha: f32) -> Self {
		Self {
			offset,
			alpha: alpha.max(0.0).min(1.0)
		}
	}

	/// Applies one frame of held keys. Offset drifts freely, alpha stays within [0, 1].
	pub fn update(self, keys: &Keys) -> Self {
		let mut state = self;

		if keys.key_pressed(Key::Right) {
			state.offset += OFFSET_STEP;
		}

		if keys.key_pressed(Key::Up) {
			state.alpha = (state.alpha + ALPHA_STEP).min(1.0);
		}

		if keys.key_pressed(Key::Left) {
			state.offset -= OFFSET_STEP;
		}

		if keys.key_pressed(Key::Down) {
			state.alpha = (state.alpha - ALPHA_STEP).max(0.0);
		}

		state
	}
}

impl Default for InputState {
	fn default() -> Self {
		Self::new(0.0, 0.6)
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RasterMode {
	Fill,
	Wireframe
}

impl RasterMode {
	// Level-triggered: a held key forces its mode every frame. F is checked
	// after W, so holding both ends up filled.
	pub fn update(self, keys: &Keys) -> Self {
		let mut mode = self;

		if keys.key_pressed(Key::W) {
			mode = RasterMode::Wireframe;
		}

		if keys.key_pressed(Key::F) {
			mode = RasterMode::Fill;
		}

		mode
	}
}

impl Default for RasterMode {
	fn default() -> Self {
		RasterMode::Fill
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn press(state: InputState, key: Key, times: usize) -> InputState {
		let keys = Keys::from_pressed(&[key]);
		(0..times).fold(state, |s, _| s.update(&keys))
	}

	#[test]
	fn default_state() {
		assert_eq!(InputState::default(), InputState { offset: 0.0, alpha: 0.6 });
	}

	#[test]
	fn new_clamps_alpha() {
		assert_eq!(InputState::new(0.0, 1.7).alpha, 1.0);
		assert_eq!(InputState::new(0.0, -0.2).alpha, 0.0);
	}

	#[test]
	fn alpha_saturates_at_one() {
		let state = press(InputState::new(0.0, 0.6), Key::Up, 100);
		assert_eq!(state.alpha, 1.0);
	}

	#[test]
	fn alpha_saturates_at_zero() {
		let state = press(InputState::new(0.0, 0.6), Key::Down, 200);
		assert_eq!(state.alpha, 0.0);
	}

	#[test]
	fn offset_right_then_left() {
		let state = press(InputState::new(0.0, 0.6), Key::Right, 3);
		let state = press(state, Key::Left, 1);
		assert!((state.offset - 0.01).abs() < 1e-6);
	}

	#[test]
	fn offset_is_unbounded() {
		let state = press(InputState::new(0.0, 0.6), Key::Right, 1000);
		assert!((state.offset - 5.0).abs() < 1e-3);

		let state = press(InputState::new(0.0, 0.6), Key::Left, 1000);
		assert!((state.offset + 5.0).abs() < 1e-3);
	}

	#[test]
	fn no_keys_is_noop() {
		let keys = Keys::new();
		let start = InputState::new(0.25, 0.4);
		let mut state = start;
		for _ in 0..50 {
			state = state.update(&keys);
			assert_eq!(state, start);
		}
	}

	#[test]
	fn raster_keys_leave_state_alone() {
		let keys = Keys::from_pressed(&[Key::W, Key::F, Key::Escape]);
		let state = InputState::default();
		assert_eq!(state.update(&keys), state);
	}

	#[test]
	fn raster_mode_keys() {
		let wire = Keys::from_pressed(&[Key::W]);
		let fill = Keys::from_pressed(&[Key::F]);
		let none = Keys::new();

		assert_eq!(RasterMode::Fill.update(&wire), RasterMode::Wireframe);
		assert_eq!(RasterMode::Wireframe.update(&none), RasterMode::Wireframe);
		assert_eq!(RasterMode::Wireframe.update(&fill), RasterMode::Fill);
		assert_eq!(RasterMode::Fill.update(&none), RasterMode::Fill);
	}

	#[test]
	fn raster_mode_both_held_fills() {
		let both = Keys::from_pressed(&[Key::F, Key::W]);
		assert_eq!(RasterMode::Wireframe.update(&both), RasterMode::Fill);
		assert_eq!(RasterMode::Fill.update(&both), RasterMode::Fill);
	}

	proptest! {
		#[test]
		fn up_presses_never_exceed_one(start in 0.0f32..=1.0, presses in 0usize..500) {
			let mut state = InputState::new(0.0, start);
			let keys = Keys::from_pressed(&[Key::Up]);
			for _ in 0..presses {
				let next = state.update(&keys);
				prop_assert!(next.alpha >= state.alpha);
				prop_assert!(next.alpha <= 1.0);
				state = next;
			}
		}

		#[test]
		fn down_presses_never_go_below_zero(start in 0.0f32..=1.0, presses in 0usize..500) {
			let mut state = InputState::new(0.0, start);
			let keys = Keys::from_pressed(&[Key::Down]);
			for _ in 0..presses {
				let next = state.update(&keys);
				prop_assert!(next.alpha <= state.alpha);
				prop_assert!(next.alpha >= 0.0);
				state = next;
			}
		}

		#[test]
		fn each_horizontal_press_moves_one_step(start in -10.0f32..10.0, right in any::<bool>()) {
			let key = if right { Key::Right } else { Key::Left };
			let expected = if right { start + OFFSET_STEP } else { start - OFFSET_STEP };
			let state = InputState::new(start, 0.5).update(&Keys::from_pressed(&[key]));
			prop_assert_eq!(state.offset, expected);
			prop_assert_eq!(state.alpha, 0.5);
		}
	}
}
