//! BikeShare frontend library: app shell, screens, widgets, browser glue.

pub mod actions;
pub mod app;
pub mod geolocation;
pub mod screens;
pub mod theme;
pub mod widgets;
