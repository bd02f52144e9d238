pub mod header;
pub mod stream;

pub use header::{parse_frame_header, FrameHeader, Layer, Version};
pub use stream::{scan_frames, MpegFrame};
