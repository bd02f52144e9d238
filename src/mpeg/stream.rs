//! Frame scanning over a raw MPEG audio byte stream.
//!
//! The scanner skips a leading ID3v2 tag, walks the stream frame by frame with
//! single-byte resync on junk, and drops a leading VBR info frame (Xing, Info
//! or VBRI) so the remaining frames line up with the actual audio packets.
//! The walk depends only on frame headers, which embedding never touches, so
//! an embed pass and a later extract pass always see the same frame sequence.

use std::ops::Range;

use log::debug;

use crate::mpeg::header::parse_frame_header;

/// One audio frame located in the carrier byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpegFrame {
    /// Absolute byte offset of the frame header.
    pub offset: usize,
    /// Whole frame length in bytes.
    pub len: usize,
    /// True when a CRC-16 follows the header.
    pub has_crc: bool,
    /// Absolute byte offset of the first main data byte.
    pub main_start: usize,
    /// Absolute byte offset one past the last main data byte.
    pub main_end: usize,
}

/// Number of bytes taken up by a leading ID3v2 tag, or 0 when there is none.
pub fn id3v2_len(data: &[u8]) -> usize {
    if data.len() < 10 || &data[0..3] != b"ID3" {
        return 0;
    }
    let flags = data[5];
    let size = (usize::from(data[6] & 0x7F) << 21)
        | (usize::from(data[7] & 0x7F) << 14)
        | (usize::from(data[8] & 0x7F) << 7)
        | usize::from(data[9] & 0x7F);
    let footer = if flags & 0x10 != 0 { 10 } else { 0 };
    10 + size + footer
}

const VBR_TAG_LEN: usize = 4;
const VBRI_TAG_OFFSET: usize = 36;

/// Byte ranges of a frame the VBR sniff inspects: the Xing/Info tag at the
/// start of the main data region, and VBRI at a fixed offset from the header.
///
/// The slot map excludes these windows of the first frame, so the sniff
/// answer stays stable under embedding and the extract-side frame walk never
/// diverges from the embed-side one.
pub(crate) fn vbr_sniff_windows(frame: &MpegFrame) -> [Range<usize>; 2] {
    let vbri_at = frame.offset + VBRI_TAG_OFFSET;
    [
        frame.main_start..frame.main_start + VBR_TAG_LEN,
        vbri_at..vbri_at + VBR_TAG_LEN,
    ]
}

/// True when the frame is a VBR info frame rather than audio.
fn is_vbr_info_frame(data: &[u8], frame: &MpegFrame) -> bool {
    let frame_end = (frame.offset + frame.len).min(data.len());
    let [xing, vbri] = vbr_sniff_windows(frame);
    if xing.end <= frame_end {
        let tag = &data[xing];
        if tag == b"Xing" || tag == b"Info" {
            return true;
        }
    }
    vbri.end <= frame_end && &data[vbri] == b"VBRI"
}

/// Scan the carrier and return its audio frames in stream order.
pub fn scan_frames(data: &[u8]) -> Vec<MpegFrame> {
    let mut frames = Vec::new();
    let mut i = id3v2_len(data);
    let n = data.len();

    while i + 4 <= n {
        let Some(header) = parse_frame_header(&data[i..]) else {
            i += 1;
            continue;
        };
        let len = header.frame_len;
        if len <= 4 || i + len > n {
            i += 1;
            continue;
        }
        let main_start = i + header.main_data_offset();
        frames.push(MpegFrame {
            offset: i,
            len,
            has_crc: header.has_crc,
            main_start,
            main_end: i + len,
        });
        i += len;
    }

    if let Some(first) = frames.first() {
        if is_vbr_info_frame(data, first) {
            debug!("dropping VBR info frame at offset {}", first.offset);
            frames.remove(0);
        }
    }

    frames
}
