// Adapters layer: turn the in-memory catalog into something a downstream consumer can read.

pub mod export;
