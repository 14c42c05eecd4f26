//! Styled Dioxus components shared by the cause list front end.

pub mod components;

pub use components::*;
