pub mod alert;
pub mod button;
pub mod spinner;

pub use alert::*;
pub use button::*;
pub use spinner::*;
