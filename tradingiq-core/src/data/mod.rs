//! Symbol fixtures and the provider trait that serves them

pub mod fixtures;
pub mod provider;

pub use fixtures::{Fixtures, SymbolFixture, BUILTIN_SYMBOLS};
pub use provider::{LookupError, MarketDataProvider};
