//! Direct read of the OS/2 typographic ascender.
//!
//! `sTypoAscender` is read straight from the raw font bytes by walking the
//! sfnt table directory and indexing into the OS/2 table. Every read is
//! bounds-checked and returns `None` on truncated or inconsistent data.

/// Size of the sfnt header preceding the table records.
const TABLE_DIRECTORY_OFFSET: usize = 12;
/// Size of one table record (tag, checksum, offset, length).
const TABLE_RECORD_SIZE: usize = 16;
/// Offset of `sTypoAscender` inside the OS/2 table.
const OS2_TYPO_ASCENDER_OFFSET: usize = 68;
const OS2_TAG: [u8; 4] = *b"OS/2";

#[inline]
fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

#[inline]
fn read_i16(data: &[u8], offset: usize) -> Option<i16> {
    read_u16(data, offset).map(|v| v as i16)
}

#[inline]
fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// One entry of the table directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableRecord {
    tag: [u8; 4],
    offset: usize,
    length: usize,
}

/// A view over the table directory of a single (non-collection) font.
#[derive(Debug, Clone, Copy)]
struct TableDirectory<'a> {
    data: &'a [u8],
    num_tables: usize,
}

impl<'a> TableDirectory<'a> {
    /// Read the directory header.
    ///
    /// Returns `None` if the buffer cannot hold the header plus all the
    /// records it declares.
    fn parse(data: &'a [u8]) -> Option<Self> {
        if data.len() < TABLE_DIRECTORY_OFFSET {
            return None;
        }
        let num_tables = read_u16(data, 4)? as usize;
        let records_end = TABLE_DIRECTORY_OFFSET + num_tables * TABLE_RECORD_SIZE;
        if data.len() < records_end {
            return None;
        }
        Some(Self { data, num_tables })
    }

    /// Iterate over the table records in directory order.
    fn records(&self) -> impl Iterator<Item = TableRecord> + 'a {
        let data = self.data;
        (0..self.num_tables).filter_map(move |i| {
            let rec = TABLE_DIRECTORY_OFFSET + i * TABLE_RECORD_SIZE;
            let tag = data.get(rec..rec + 4)?;
            Some(TableRecord {
                tag: [tag[0], tag[1], tag[2], tag[3]],
                offset: read_u32(data, rec + 8)? as usize,
                length: read_u32(data, rec + 12)? as usize,
            })
        })
    }

    /// First record carrying `tag`.
    fn find(&self, tag: [u8; 4]) -> Option<TableRecord> {
        self.records().find(|r| r.tag == tag)
    }

    /// The bytes of the first table carrying `tag`.
    ///
    /// Returns `None` if the tag is absent or its declared extent runs past
    /// the end of the buffer.
    fn table(&self, tag: [u8; 4]) -> Option<&'a [u8]> {
        let record = self.find(tag)?;
        let end = record.offset.checked_add(record.length)?;
        self.data.get(record.offset..end)
    }
}

/// Read `sTypoAscender` from the OS/2 table.
///
/// Only the first OS/2 record is considered. Returns `None` when the table
/// is absent, out of bounds, too short to hold the field, or the value is
/// not positive.
pub fn typo_ascender(data: &[u8]) -> Option<i16> {
    let dir = TableDirectory::parse(data)?;
    let os2 = dir.table(OS2_TAG)?;
    if os2.len() < OS2_TYPO_ASCENDER_OFFSET + 2 {
        return None;
    }
    read_i16(os2, OS2_TYPO_ASCENDER_OFFSET).filter(|&asc| asc > 0)
}
