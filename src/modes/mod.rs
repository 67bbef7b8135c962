pub mod clock;
pub mod human;
pub mod menu;

pub use clock::TickClock;
pub use human::HumanMode;
pub use menu::{MenuRow, MenuSelection};
