//! uni-companion — a university companion for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ raw records ┌──────────────┐ domain lists ┌──────────────┐
//! │ source/  │ ──────────► │ repository/  │ ───────────► │ controller   │
//! │ (HTTP)   │             │ (adapter or  │              │ (Loading /   │
//! └──────────┘             │  bundled)    │              │  Success /   │
//!                          └──────────────┘              │  Error)      │
//!                                                        └──────┬───────┘
//!                                                               │ state (broadcast)
//!                  ┌──────────┐  handle_key_event()  ┌──────────▼───┐  draw()  ┌──────┐
//!                  │ input.rs │ ───────────────────► │    app.rs    │ ───────► │ ui   │
//!                  └──────────┘                      └──────────────┘          └──────┘
//! ```
//!
//! * **`source`** — the `DataProvider` trait and the remote placeholder
//!   endpoint implementation.
//! * **`repository`** — the `Repository` trait; adapts raw records or reads
//!   bundled JSON assets.
//! * **`state`** — `ScreenState` plus the single-writer publisher and
//!   read-only subscriptions.
//! * **`controller`** — one generic state machine, instantiated for the
//!   schedule and resources screens.
//! * **`nav`** — routes and the back stack.
//! * **`app`** / **`ui`** / **`input`** — terminal presentation.
//! * **`config`** — picks bundled assets or the remote endpoint.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod nav;
pub mod repository;
pub mod source;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;
