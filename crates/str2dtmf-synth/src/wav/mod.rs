//! PCM WAV output for rendered DTMF buffers.
//!
//! Files are written through `hound` with a canonical 44-byte header and no
//! variable metadata, so identical buffers always produce identical files.
//! Mono buffers are duplicated into both channels for stereo output.

mod builder;
mod format;
mod pcm;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use format::{WavFormat, MAX_BYTE_RATE, MAX_DATA_BYTES};
pub use pcm::{compute_pcm_hash, extract_pcm_data, read_wav_info, WavInfo};
pub use writer::{write_wav, write_wav_file, write_wav_to_vec};
