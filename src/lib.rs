//! Attrition — an arcade asteroids shooter.
//!
//! A lone ship rotates, thrusts, and fires at drifting asteroids that break
//! into faster fragments when hit, while shield and speed power-ups drop from
//! the wreckage.  Built on Bevy: entities are ECS entities, the frame loop is
//! the `Update` schedule, and everything draws as gizmo wireframes.

pub mod asteroid;
pub mod collision;
pub mod config;
pub mod constants;
pub mod explosion;
pub mod game;
pub mod motion;
pub mod player;
pub mod powerup;
