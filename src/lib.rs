//! Menu bar widget library.
//!
//! This library provides a horizontal tab bar with an animated selection
//! indicator for ratatui applications:
//!
//! - `menu_bar` - `MenuBar` state, slot cells and the `MenuBarWidget`
//! - `listener` - weakly held selection listener interface
//! - `models` - indicator geometry and style types
//! - `config` - JSON configuration loading
//!
//! # Usage
//!
//! ```ignore
//! use std::rc::Rc;
//! use menubar_tui::listener::SelectionListener;
//! use menubar_tui::menu_bar::{MenuBar, MenuBarWidget};
//!
//! struct Pager;
//! impl SelectionListener for Pager {
//!     fn scroll_to(&self, index: usize) { /* page the content view */ }
//! }
//!
//! let pager = Rc::new(Pager);
//! let mut bar = MenuBar::new();
//! bar.set_tabs(["Home", "Feed", "Profile"]);
//! bar.set_listener(&pager);
//!
//! // Every frame:
//! bar.tick(frame_delta);
//! frame.render_stateful_widget(MenuBarWidget, header_area, &mut bar);
//! ```

pub mod config;
pub mod listener;
pub mod menu_bar;
pub mod models;
