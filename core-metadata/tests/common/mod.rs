//! Synthetic audio files for integration tests.
//!
//! The files carry valid container headers and metadata blocks but no real
//! audio frames, which is all the tag library needs to read them.

use std::fs;
use std::path::PathBuf;

pub const SAMPLE_RATE: u32 = 44_100;

/// Helper to get the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Writes `contents` to a uniquely named fixture and returns its path.
pub fn write_fixture(name: &str, contents: &[u8]) -> PathBuf {
    let dir = fixtures_dir();
    fs::create_dir_all(&dir).expect("Failed to create fixtures directory");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

pub struct FlacBuilder {
    seconds: u32,
    comments: Vec<(String, String)>,
    pictures: Vec<(String, Vec<u8>)>,
}

impl FlacBuilder {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            comments: Vec::new(),
            pictures: Vec::new(),
        }
    }

    pub fn comment(mut self, key: &str, value: &str) -> Self {
        self.comments.push((key.to_string(), value.to_string()));
        self
    }

    pub fn picture(mut self, mime_type: &str, data: &[u8]) -> Self {
        self.pictures.push((mime_type.to_string(), data.to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut blocks = vec![(0u8, self.stream_info())];
        if !self.comments.is_empty() {
            blocks.push((4, self.vorbis_comments()));
        }
        for (mime_type, data) in &self.pictures {
            blocks.push((6, picture_block(mime_type, data)));
        }

        let mut out = b"fLaC".to_vec();
        let count = blocks.len();
        for (index, (kind, content)) in blocks.into_iter().enumerate() {
            let header = if index + 1 == count { 0x80 | kind } else { kind };
            out.push(header);
            out.extend_from_slice(&(content.len() as u32).to_be_bytes()[1..]);
            out.extend_from_slice(&content);
        }
        out
    }

    fn stream_info(&self) -> Vec<u8> {
        let total_samples = u64::from(SAMPLE_RATE) * u64::from(self.seconds);
        // sample rate (20 bits) | channels - 1 (3) | bits per sample - 1 (5) | total samples (36)
        let packed = (u64::from(SAMPLE_RATE) << 44) | (1 << 41) | (15 << 36) | total_samples;

        let mut out = Vec::with_capacity(34);
        out.extend_from_slice(&4096u16.to_be_bytes());
        out.extend_from_slice(&4096u16.to_be_bytes());
        out.extend_from_slice(&[0; 6]);
        out.extend_from_slice(&packed.to_be_bytes());
        out.extend_from_slice(&[0; 16]);
        out
    }

    fn vorbis_comments(&self) -> Vec<u8> {
        let vendor = b"tagbridge tests";
        let mut out = Vec::new();
        out.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
        out.extend_from_slice(vendor);
        out.extend_from_slice(&(self.comments.len() as u32).to_le_bytes());
        for (key, value) in &self.comments {
            let comment = format!("{}={}", key, value);
            out.extend_from_slice(&(comment.len() as u32).to_le_bytes());
            out.extend_from_slice(comment.as_bytes());
        }
        out
    }
}

fn picture_block(mime_type: &str, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&3u32.to_be_bytes()); // front cover
    out.extend_from_slice(&(mime_type.len() as u32).to_be_bytes());
    out.extend_from_slice(mime_type.as_bytes());
    out.extend_from_slice(&0u32.to_be_bytes()); // no description
    out.extend_from_slice(&[0; 16]); // width, height, depth, colors
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(data);
    out
}

/// A one second, 16-bit stereo PCM WAV file.
pub fn wav() -> Vec<u8> {
    let channels: u16 = 2;
    let bits_per_sample: u16 = 16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data = vec![0u8; byte_rate as usize];

    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes()); // PCM
    fmt.extend_from_slice(&channels.to_le_bytes());
    fmt.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    fmt.extend_from_slice(&byte_rate.to_le_bytes());
    fmt.extend_from_slice(&block_align.to_le_bytes());
    fmt.extend_from_slice(&bits_per_sample.to_le_bytes());

    let mut body = b"WAVE".to_vec();
    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
    body.extend_from_slice(&fmt);
    body.extend_from_slice(b"data");
    body.extend_from_slice(&(data.len() as u32).to_le_bytes());
    body.extend_from_slice(&data);

    let mut out = b"RIFF".to_vec();
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding.
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
const MPEG_FRAME_LEN: usize = 417;

/// An MP3 with an ID3v2.4 tag followed by silent CBR frames.
pub struct Mp3Builder {
    frames: Vec<([u8; 4], Vec<u8>)>,
    audio_frames: usize,
}

impl Mp3Builder {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            audio_frames: 40,
        }
    }

    /// UTF-8 text frame such as `TIT2` or `TPOS`.
    pub fn text(mut self, id: &str, value: &str) -> Self {
        let mut content = vec![3u8];
        content.extend_from_slice(value.as_bytes());
        self.frames.push((frame_id(id), content));
        self
    }

    /// Front cover `APIC` frame.
    pub fn picture(mut self, mime_type: &str, data: &[u8]) -> Self {
        let mut content = vec![0u8]; // Latin-1
        content.extend_from_slice(mime_type.as_bytes());
        content.push(0);
        content.push(3); // front cover
        content.push(0); // empty description
        content.extend_from_slice(data);
        self.frames.push((*b"APIC", content));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Vec::new();
        for (id, content) in &self.frames {
            body.extend_from_slice(id);
            body.extend_from_slice(&synchsafe(content.len()));
            body.extend_from_slice(&[0, 0]);
            body.extend_from_slice(content);
        }

        let mut out = b"ID3".to_vec();
        out.extend_from_slice(&[4, 0, 0]);
        out.extend_from_slice(&synchsafe(body.len()));
        out.extend_from_slice(&body);

        for _ in 0..self.audio_frames {
            out.extend_from_slice(&MPEG_FRAME_HEADER);
            out.extend_from_slice(&[0; MPEG_FRAME_LEN - 4]);
        }
        out
    }
}

fn frame_id(id: &str) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&id.as_bytes()[..4]);
    out
}

fn synchsafe(len: usize) -> [u8; 4] {
    let len = len as u32;
    [
        ((len >> 21) & 0x7F) as u8,
        ((len >> 14) & 0x7F) as u8,
        ((len >> 7) & 0x7F) as u8,
        (len & 0x7F) as u8,
    ]
}

/// An M4A with one audio track header and an `ilst` tag, no sample data.
pub struct Mp4Builder {
    seconds: u32,
    items: Vec<Vec<u8>>,
}

impl Mp4Builder {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            items: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.items
            .push(atom(b"\xa9nam", &data_atom(1, title.as_bytes())));
        self
    }

    pub fn disc(mut self, number: u16, total: u16) -> Self {
        let mut payload = vec![0, 0];
        payload.extend_from_slice(&number.to_be_bytes());
        payload.extend_from_slice(&total.to_be_bytes());
        self.items.push(atom(b"disk", &data_atom(0, &payload)));
        self
    }

    pub fn compilation(mut self, flag: bool) -> Self {
        self.items
            .push(atom(b"cpil", &data_atom(21, &[u8::from(flag)])));
        self
    }

    /// One `covr` atom holding every picture, as `(type code, data)`.
    /// Codes: 13 JPEG, 14 PNG, 27 BMP.
    pub fn covers(mut self, pictures: &[(u32, &[u8])]) -> Self {
        let mut content = Vec::new();
        for (code, data) in pictures {
            content.extend_from_slice(&data_atom(*code, data));
        }
        self.items.push(atom(b"covr", &content));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut ftyp = b"M4A ".to_vec();
        ftyp.extend_from_slice(&0u32.to_be_bytes());
        ftyp.extend_from_slice(b"M4A isom");

        let mut mdhd = vec![0u8; 12]; // version, flags, creation, modification
        mdhd.extend_from_slice(&SAMPLE_RATE.to_be_bytes());
        mdhd.extend_from_slice(&(SAMPLE_RATE * self.seconds).to_be_bytes());
        mdhd.extend_from_slice(&[0x55, 0xC4, 0, 0]); // language, quality

        let mut hdlr = vec![0u8; 8]; // version, flags, pre-defined
        hdlr.extend_from_slice(b"soun");
        hdlr.extend_from_slice(&[0; 12]);
        hdlr.push(0); // empty name

        let mut mdia = atom(b"mdhd", &mdhd);
        mdia.extend_from_slice(&atom(b"hdlr", &hdlr));
        let trak = atom(b"trak", &atom(b"mdia", &mdia));

        let ilst = atom(b"ilst", &self.items.concat());
        let mut meta = vec![0u8; 4]; // version, flags
        meta.extend_from_slice(&ilst);
        let udta = atom(b"udta", &atom(b"meta", &meta));

        let mut moov = trak;
        moov.extend_from_slice(&udta);

        let mut out = atom(b"ftyp", &ftyp);
        out.extend_from_slice(&atom(b"moov", &moov));
        out
    }
}

fn atom(ident: &[u8; 4], content: &[u8]) -> Vec<u8> {
    let mut out = ((content.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(ident);
    out.extend_from_slice(content);
    out
}

fn data_atom(type_code: u32, payload: &[u8]) -> Vec<u8> {
    let mut content = type_code.to_be_bytes().to_vec(); // version 0 + 24-bit type
    content.extend_from_slice(&[0; 4]); // locale
    content.extend_from_slice(payload);
    atom(b"data", &content)
}
