pub mod speech_synthesizer;
pub mod text_generator;
