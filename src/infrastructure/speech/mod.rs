mod edge_tts_synthesizer;
mod mock_speech;
mod openai_whisper_recognizer;
mod recognizer_factory;

pub use edge_tts_synthesizer::{EdgeTtsSynthesizer, edge_tts_args};
pub use mock_speech::{MockSpeechRecognizer, MockSpeechSynthesizer};
pub use openai_whisper_recognizer::OpenAiWhisperRecognizer;
pub use recognizer_factory::{RecognizerProvider, SpeechRecognizerFactory};
