mod google_web_translator;
mod mock_translator;
mod mymemory_translator;
mod translator_factory;

pub use google_web_translator::{GoogleWebTranslator, parse_google_response};
pub use mock_translator::{MockTranslator, MockTranslatorBehavior};
pub use mymemory_translator::{MyMemoryTranslator, mymemory_target};
pub use translator_factory::TranslatorFactory;
