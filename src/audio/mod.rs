pub mod engine;
pub mod keyer;
pub mod morse;
pub mod synth;

pub use engine::AudioEngine;
pub use keyer::MorseKeyer;
