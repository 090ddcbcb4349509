#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const FIT_SINT32: u8 = 0x85;
const FIT_UINT32: u8 = 0x86;
const FIT_ENUM: u8 = 0x00;

const MESG_FILE_ID: u16 = 0;
const MESG_RECORD: u16 = 20;

const FIELD_POSITION_LAT: u8 = 0;
const FIELD_POSITION_LONG: u8 = 1;
const FIELD_TIMESTAMP: u8 = 253;

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

fn fit_crc(bytes: &[u8]) -> u16 {
    let mut crc = 0u16;
    for &byte in bytes {
        let tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ CRC_TABLE[(byte & 0xF) as usize];

        let tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ CRC_TABLE[((byte >> 4) & 0xF) as usize];
    }
    crc
}

/// Minimal little-endian FIT encoder, just enough to produce record messages.
#[derive(Default)]
pub struct FitWriter {
    data: Vec<u8>,
}

impl FitWriter {
    /// `fields` are `(field number, size, base type)`.
    pub fn define(&mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) {
        self.data.push(0x40 | local);
        self.data.push(0); // reserved
        self.data.push(0); // little endian
        self.data.extend_from_slice(&global.to_le_bytes());
        self.data.push(fields.len() as u8);
        for &(number, size, base_type) in fields {
            self.data.extend_from_slice(&[number, size, base_type]);
        }
    }

    pub fn message(&mut self, local: u8, payload: &[u8]) {
        self.data.push(local);
        self.data.extend_from_slice(payload);
    }

    pub fn finish(self) -> Vec<u8> {
        let mut file = Vec::with_capacity(self.data.len() + 16);
        file.push(14);
        file.push(0x20);
        file.extend_from_slice(&2132u16.to_le_bytes());
        file.extend_from_slice(&(self.data.len() as u32).to_le_bytes());
        file.extend_from_slice(b".FIT");
        let header_crc = fit_crc(&file);
        file.extend_from_slice(&header_crc.to_le_bytes());

        file.extend_from_slice(&self.data);
        let file_crc = fit_crc(&file);
        file.extend_from_slice(&file_crc.to_le_bytes());
        file
    }
}

pub fn degrees_to_semicircles(degrees: f64) -> i32 {
    (degrees * 2_147_483_648.0 / 180.0).round() as i32
}

/// An activity file with one record message per entry. Missing halves of a
/// position are left out of the record entirely.
pub fn activity_fit(records: &[(Option<i32>, Option<i32>)]) -> Vec<u8> {
    let mut writer = FitWriter::default();

    writer.define(0, MESG_FILE_ID, &[(0, 1, FIT_ENUM)]);
    writer.message(0, &[4]); // activity

    writer.define(
        1,
        MESG_RECORD,
        &[
            (FIELD_TIMESTAMP, 4, FIT_UINT32),
            (FIELD_POSITION_LAT, 4, FIT_SINT32),
            (FIELD_POSITION_LONG, 4, FIT_SINT32),
        ],
    );
    writer.define(
        2,
        MESG_RECORD,
        &[(FIELD_TIMESTAMP, 4, FIT_UINT32), (FIELD_POSITION_LAT, 4, FIT_SINT32)],
    );
    writer.define(
        3,
        MESG_RECORD,
        &[(FIELD_TIMESTAMP, 4, FIT_UINT32), (FIELD_POSITION_LONG, 4, FIT_SINT32)],
    );
    writer.define(4, MESG_RECORD, &[(FIELD_TIMESTAMP, 4, FIT_UINT32)]);

    for (i, &(lat, lon)) in records.iter().enumerate() {
        let mut payload = (1_000_000_000u32 + i as u32).to_le_bytes().to_vec();
        let local = match (lat, lon) {
            (Some(lat), Some(lon)) => {
                payload.extend_from_slice(&lat.to_le_bytes());
                payload.extend_from_slice(&lon.to_le_bytes());
                1
            }
            (Some(lat), None) => {
                payload.extend_from_slice(&lat.to_le_bytes());
                2
            }
            (None, Some(lon)) => {
                payload.extend_from_slice(&lon.to_le_bytes());
                3
            }
            (None, None) => 4,
        };
        writer.message(local, &payload);
    }

    writer.finish()
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn gpx_document(tracks: &[&[(f64, f64)]]) -> String {
    let mut body = String::new();
    for points in tracks {
        body.push_str("  <trk>\n    <trkseg>\n");
        for (lat, lon) in points.iter() {
            body.push_str(&format!(
                "      <trkpt lat=\"{lat:?}\" lon=\"{lon:?}\"></trkpt>\n"
            ));
        }
        body.push_str("    </trkseg>\n  </trk>\n");
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"track-map tests\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n\
         {body}</gpx>\n"
    )
}

pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Pulls the embedded map data back out of a generated page.
pub fn map_data(html: &str) -> serde_json::Value {
    let start = html.find("const data = ").unwrap() + "const data = ".len();
    let end = start + html[start..].find(";\n").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}
