pub mod camera;
pub mod clock;
pub mod session;
pub mod settings;

pub use camera::{BoardLayout, Camera};
pub use clock::{IntervalTimer, SimulationClock, TickSource};
pub use session::{Repaint, Session};
pub use settings::{Settings, SettingsDebounce, SettingsError};
