mod items;
mod provider;

pub use provider::CompletionProvider;
