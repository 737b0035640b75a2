use std::io::BufReader;

/// Compresses a document into the xz container format.
pub(crate) fn xz_compress(document: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut input = BufReader::new(document);
    let mut output = Vec::new();
    lzma_rs::xz_compress(&mut input, &mut output)?;
    Ok(output)
}
