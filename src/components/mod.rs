mod preset_button;

pub use preset_button::PresetButton;
