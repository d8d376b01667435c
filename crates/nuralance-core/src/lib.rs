pub mod client;
pub mod event_bus;
pub mod ports;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::ChatClient;
pub use event_bus::EventBus;
