// App module for zenith-radar
// Holds the screen state and key handling around the radar view

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
