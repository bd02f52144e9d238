//! MPEG audio frame header parsing.
//!
//! Only the fields the slot model needs are decoded: enough to walk the frame
//! sequence and to locate each frame's main data region. No audio is decoded.

/// MPEG version as encoded in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

/// MPEG layer as encoded in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    I,
    II,
    III,
}

/// A parsed 4-byte MPEG audio frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: Version,
    pub layer: Layer,
    /// Bitrate in bits per second.
    pub bitrate: u32,
    /// Sampling rate in Hz.
    pub samplerate: u32,
    pub padding: bool,
    /// True when the 16-bit CRC follows the header.
    pub has_crc: bool,
    pub channels: u8,
    /// Whole frame length in bytes, header included.
    pub frame_len: usize,
}

const BITRATES_V1: [[u16; 16]; 3] = [
    // Layer I
    [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0],
    // Layer II
    [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0],
    // Layer III
    [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0],
];

const BITRATES_V2: [[u16; 16]; 3] = [
    // Layer I
    [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0],
    // Layers II and III share one table in MPEG-2/2.5
    [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
    [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
];

const SAMPLERATES_V1: [u32; 3] = [44_100, 48_000, 32_000];
const SAMPLERATES_V2: [u32; 3] = [22_050, 24_000, 16_000];
const SAMPLERATES_V25: [u32; 3] = [11_025, 12_000, 8_000];

fn bitrate_kbps(version: Version, layer: Layer, index: usize) -> Option<u32> {
    let row = match layer {
        Layer::I => 0,
        Layer::II => 1,
        Layer::III => 2,
    };
    let kbps = match version {
        Version::Mpeg1 => BITRATES_V1[row][index],
        Version::Mpeg2 | Version::Mpeg25 => BITRATES_V2[row][index],
    };
    if kbps == 0 {
        None
    } else {
        Some(u32::from(kbps))
    }
}

fn samplerate_hz(version: Version, index: usize) -> Option<u32> {
    if index >= 3 {
        return None;
    }
    Some(match version {
        Version::Mpeg1 => SAMPLERATES_V1[index],
        Version::Mpeg2 => SAMPLERATES_V2[index],
        Version::Mpeg25 => SAMPLERATES_V25[index],
    })
}

/// Parse a frame header from the first 4 bytes of `b`.
///
/// Returns `None` for anything that is not a valid MPEG audio frame header:
/// missing sync word, reserved version/layer, or free/bad bitrate and
/// samplerate indices.
pub fn parse_frame_header(b: &[u8]) -> Option<FrameHeader> {
    if b.len() < 4 {
        return None;
    }
    if b[0] != 0xFF || (b[1] & 0xE0) != 0xE0 {
        return None;
    }

    let version = match (b[1] >> 3) & 0x03 {
        3 => Version::Mpeg1,
        2 => Version::Mpeg2,
        0 => Version::Mpeg25,
        _ => return None,
    };
    let layer = match (b[1] >> 1) & 0x03 {
        3 => Layer::I,
        2 => Layer::II,
        1 => Layer::III,
        _ => return None,
    };
    let has_crc = (b[1] & 0x01) == 0;

    let bitrate_index = usize::from((b[2] >> 4) & 0x0F);
    let samplerate_index = usize::from((b[2] >> 2) & 0x03);
    let padding = (b[2] >> 1) & 0x01 == 1;
    let channel_mode = (b[3] >> 6) & 0x03;

    let kbps = bitrate_kbps(version, layer, bitrate_index)?;
    let samplerate = samplerate_hz(version, samplerate_index)?;
    let bitrate = kbps * 1000;
    let pad = usize::from(padding);

    let frame_len = match layer {
        Layer::I => (12 * bitrate as usize / samplerate as usize + pad) * 4,
        Layer::II | Layer::III => {
            let factor = if version == Version::Mpeg1 { 144 } else { 72 };
            factor * bitrate as usize / samplerate as usize + pad
        }
    };

    Some(FrameHeader {
        version,
        layer,
        bitrate,
        samplerate,
        padding,
        has_crc,
        channels: if channel_mode == 3 { 1 } else { 2 },
        frame_len,
    })
}

impl FrameHeader {
    /// Side information length in bytes. Only Layer III carries side info.
    pub fn side_info_len(&self) -> usize {
        match self.layer {
            Layer::III => match (self.version, self.channels) {
                (Version::Mpeg1, 1) => 17,
                (Version::Mpeg1, _) => 32,
                (_, 1) => 9,
                (_, _) => 17,
            },
            _ => 0,
        }
    }

    /// Offset of the main data region relative to the frame start.
    pub fn main_data_offset(&self) -> usize {
        4 + if self.has_crc { 2 } else { 0 } + self.side_info_len()
    }
}
