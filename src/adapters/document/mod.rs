//! Document adapters - config document rendering.

mod yaml_synthesizer;

pub use yaml_synthesizer::YamlConfigSynthesizer;
