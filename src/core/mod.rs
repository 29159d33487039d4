//! # Core Dashboard Logic
//!
//! The state machine behind the dashboard.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (theme, panel) │
//!                    │  • Action (keys)        │
//!                    │  • update() (reducer)   │
//!                    │  • Config               │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Content   │
//!     │  Adapter   │                          │ providers  │
//!     │(crossterm) │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `DashboardState`, `ThemeId`, `PanelKey`
//! - [`action`]: key → `Action` mapping and the `update()` reducer
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod state;
