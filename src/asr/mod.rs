pub mod interface;
pub mod whisper;

pub use interface::ASRInterface;
pub use whisper::WhisperASR;
