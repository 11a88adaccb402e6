// src/gui/components/mod.rs
pub mod data_table;
pub mod input_bar;
pub mod panels;
pub mod settings_bar;
