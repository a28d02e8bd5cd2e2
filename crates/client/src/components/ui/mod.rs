//! UI primitives (Button, Card, Badge, icons)

pub mod badge;
pub mod button;
pub mod card;
pub mod icons;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use icons::*;
