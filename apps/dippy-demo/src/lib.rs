#![allow(non_snake_case)]

pub mod app;
mod launcher;

pub use launcher::DemoLauncher;
