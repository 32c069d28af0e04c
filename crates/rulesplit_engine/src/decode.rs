use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use rulesplit_logging::rules_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

/// Decode a fetched rule list into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
///
/// The BOM is stripped. Malformed sequences become U+FFFD and are logged; a
/// list is never rejected for its encoding.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedText {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) Content-Type header charset
    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    // 3) chardetng detection; plain ASCII lists come out as windows-1252, which is a superset
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches(['"', '\''].as_ref()).to_string())
            } else {
                None
            }
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedText {
    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    if had_errors {
        rules_warn!("Malformed {} sequences replaced while decoding", enc.name());
    }
    DecodedText {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    }
}
