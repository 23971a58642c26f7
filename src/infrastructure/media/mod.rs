mod command;
mod ffmpeg_audio_extractor;
mod ffmpeg_muxer;
mod mock_media;
mod ytdlp_fetcher;

pub use command::{CommandError, run_command};
pub use ffmpeg_audio_extractor::{FfmpegAudioExtractor, extract_audio_args};
pub use ffmpeg_muxer::{FfmpegMuxer, mux_args, video_filter};
pub use mock_media::{MockAudioExtractor, MockMediaFetcher, MockMediaMuxer};
pub use ytdlp_fetcher::{YtDlpFetcher, parse_ytdlp_output, validate_source_url, ytdlp_args};
