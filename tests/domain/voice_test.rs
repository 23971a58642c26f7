use dubline::domain::{DEFAULT_VOICE, voice_for_language};

#[test]
fn given_known_language_when_selecting_voice_then_returns_catalog_voice() {
    assert_eq!(voice_for_language("my"), "my-MM-ThihaNeural");
    assert_eq!(voice_for_language("ja"), "ja-JP-NanamiNeural");
    assert_eq!(voice_for_language("TH"), "th-TH-PremwadeeNeural");
}

#[test]
fn given_unknown_language_when_selecting_voice_then_returns_default() {
    assert_eq!(voice_for_language("xx"), DEFAULT_VOICE);
    assert_eq!(voice_for_language(""), DEFAULT_VOICE);
}
