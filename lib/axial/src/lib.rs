mod axial;
mod layout;

pub use axial::{round, Axial, DIRECTIONS};
pub use layout::{Convert, Layout, Orientation};
