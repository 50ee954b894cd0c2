//! Core types shared across the neura crates.

mod contact;
mod geometry;
mod route;
mod theme;

pub use contact::{Budget, ContactForm, Field, FieldIssue, FieldPolicy};
pub use geometry::{Vec2, Viewport, intersection_ratio};
pub use route::Route;
pub use theme::{AnimationSpeed, ColorTheme};
