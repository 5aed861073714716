//! Application layer: configuration and the factory container.
//!
//! `App` centralises how strategies, sessions and simulations are built so
//! the CLI and tests wire things the same way, with an optional default seed
//! for reproducible runs.
//!
//! # Usage
//!
//! ```
//! use roshambo::app::{App, SessionConfig};
//! use roshambo::{rps::Move, strategies::GameMode};
//!
//! let app = App::new();
//! let mut session = app.create_session(SessionConfig::new(GameMode::Psychology).with_seed(42));
//! let report = session.play_round(Move::Rock)?;
//! assert_eq!(report.round_num, 0);
//! # Ok::<(), roshambo::Error>(())
//! ```
//!
//! ## Testing
//!
//! ```
//! use roshambo::app::App;
//!
//! let app = App::for_testing().with_default_seed(42).build();
//! ```

pub mod config;
pub mod container;

pub use config::SessionConfig;
pub use container::{App, AppBuilder};
