mod artifact_store;
mod audio_extractor;
mod job_registry;
mod media_fetcher;
mod media_muxer;
mod registry_error;
mod speech_recognizer;
mod speech_synthesizer;
mod translation_provider;

pub use artifact_store::{ArtifactContent, ArtifactError, ArtifactStore};
pub use audio_extractor::{AudioExtractionError, AudioExtractor};
pub use job_registry::JobRegistry;
pub use media_fetcher::{FetchError, FetchedMedia, MediaFetcher};
pub use media_muxer::{MediaMuxer, MuxError};
pub use registry_error::RegistryError;
pub use speech_recognizer::{SpeechRecognizer, Transcript, TranscriptionError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use translation_provider::{TranslationError, TranslationProvider};
