pub const DEFAULT_VOICE: &str = "en-US-JennyNeural";

const VOICES: &[(&str, &str)] = &[
    ("my", "my-MM-ThihaNeural"),
    ("en", "en-US-JennyNeural"),
    ("th", "th-TH-PremwadeeNeural"),
    ("zh", "zh-CN-XiaoxiaoNeural"),
    ("ja", "ja-JP-NanamiNeural"),
];

/// Synthesizer voice for a target language code.
pub fn voice_for_language(lang: &str) -> &'static str {
    VOICES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(lang))
        .map(|(_, voice)| *voice)
        .unwrap_or(DEFAULT_VOICE)
}
