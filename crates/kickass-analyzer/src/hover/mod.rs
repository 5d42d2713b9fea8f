mod provider;
mod render;

pub use provider::HoverProvider;
