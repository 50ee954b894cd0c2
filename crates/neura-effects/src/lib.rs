//! Animated effects for the neura showcase.
//!
//! The centrepiece is a drifting "neural network" background: nodes wander
//! around the viewport on yoyo tweens while the links between them follow
//! along and pulse in opacity. The effect talks to its rendering surface only
//! through the [`NetworkView`] capability; [`Scene`] is the retained
//! implementation drawn by the [`NetworkCanvas`] widget.
//!
//! [`Counter`] animates a stat from zero to its target the first time it
//! scrolls into view.

mod canvas;
mod color;
mod config;
mod counter;
mod network;
mod scene;
mod view;

pub use canvas::NetworkCanvas;
pub use color::{fade, lighten};
pub use config::{CounterConfig, GlowTreatment, NetworkConfig, ResizeMode, SyncStrategy};
pub use counter::{Counter, CounterState};
pub use network::{Link, Network, NetworkEffect, Node};
pub use scene::{Scene, SceneLink, SceneNode};
pub use view::NetworkView;
