//! UI layer for the desktop GUI: the country table screen.

pub mod app;

pub use app::CountryTableApp;
