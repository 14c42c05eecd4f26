// Standalone components (no primitives)
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
