// src/lib.rs

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod net;
pub mod present;
pub mod worker;

pub mod csv;
pub mod file;
pub mod gui;
pub mod log;
