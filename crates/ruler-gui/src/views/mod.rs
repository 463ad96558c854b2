pub mod color_dialog;
pub mod controls;
pub mod ruler;

pub use color_dialog::{ColorDialogAction, ColorDialogState, show_color_dialog};
pub use controls::{ControlAction, show_controls};
pub use ruler::show_ruler;
