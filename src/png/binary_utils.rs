pub fn read_u32(offset: &mut usize, bytes: &[u8]) -> Option<u32> {
    let word: [u8; 4] = read_bytes(offset, bytes, 4)?.try_into().ok()?;

    Some(u32::from_be_bytes(word))
}

pub fn read_bytes<'a>(offset: &mut usize, bytes: &'a [u8], size: usize) -> Option<&'a [u8]> {
    let result = bytes.get(*offset..offset.checked_add(size)?)?;
    *offset += size;

    Some(result)
}
