use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }

    pub fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Image {
    pub fn segment_at(&self, addr: u32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(addr))
    }

    /// Bytes from `addr` to the end of its segment.
    pub fn bytes_from(&self, addr: u32) -> Option<&[u8]> {
        let s = self.segment_at(addr)?;
        Some(&s.bytes[(addr - s.base) as usize..])
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    anyhow::ensure!(
        base.checked_add(payload.len() as u32).is_some(),
        "image does not fit in the 32-bit address space at --base {base:#x}"
    );
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}
