//! Codepage detection and encoding mapping.
//!
//! DXF files older than AutoCAD 2007 declare their character encoding as a
//! `$DWGCODEPAGE` header variable. When no explicit encoding is supplied,
//! the tokenizer buffers the head of the stream, probes it for that
//! declaration, and decodes the whole stream with the mapped encoding.

use encoding_rs::Encoding;

/// How many bytes of the stream head are buffered for the codepage probe.
///
/// Inherited heuristic limit; the declaration sits near the top of the
/// header section, well inside this window in practice.
pub const CODEPAGE_PROBE_LIMIT: usize = 9000;

/// Probe a buffered stream head for a `$DWGCODEPAGE` declaration.
///
/// The head is decoded lossily (the declaration itself is plain ASCII) and
/// scanned line by line: the value two lines after the `$DWGCODEPAGE` name
/// line is the codepage label. Returns `None` when no declaration is found
/// inside the buffer, when the label is unknown, or when the label means
/// UTF-8 - all of which fall back to default decoding.
pub fn detect_code_page(head: &[u8]) -> Option<&'static Encoding> {
    let text = String::from_utf8_lossy(head);
    let mut lines = text.lines().map(str::trim);

    while let Some(line) = lines.next() {
        if line == "$DWGCODEPAGE" {
            // the declaration is `9 / $DWGCODEPAGE / 3 / <label>`
            let _code = lines.next()?;
            let label = lines.next()?;
            return encoding_from_code_page(label);
        }
        if line == "ENDSEC" {
            // the declaration lives in the header section only
            return None;
        }
    }
    None
}

/// Map a DXF codepage label to an `encoding_rs` encoding.
///
/// Returns `None` when the label means UTF-8/ASCII (no transcoding needed)
/// or is not recognized (callers fall back to default decoding).
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    match code_page.to_ascii_lowercase().as_str() {
        // Asian encodings
        "gb2312" | "ansi_936" => Some(encoding_rs::GBK),
        "big5" | "ansi_950" => Some(encoding_rs::BIG5),
        "korean" | "ansi_949" | "johab" => Some(encoding_rs::EUC_KR),
        "ansi_932" => Some(encoding_rs::SHIFT_JIS),

        // DOS/OEM code pages, mapped to the closest encoding_rs equivalent
        "dos437" | "dos855" | "dos866" => Some(encoding_rs::IBM866),
        "dos850" | "dos860" | "dos861" | "dos863" | "dos865" => Some(encoding_rs::WINDOWS_1252),
        "dos852" => Some(encoding_rs::WINDOWS_1250),
        "dos857" => Some(encoding_rs::WINDOWS_1254),
        "dos869" => Some(encoding_rs::WINDOWS_1253),

        // Windows/ANSI code pages
        "ansi_874" => Some(encoding_rs::WINDOWS_874),
        "ansi_1250" => Some(encoding_rs::WINDOWS_1250),
        "ansi_1251" => Some(encoding_rs::WINDOWS_1251),
        "ansi_1252" => Some(encoding_rs::WINDOWS_1252),
        "ansi_1253" => Some(encoding_rs::WINDOWS_1253),
        "ansi_1254" => Some(encoding_rs::WINDOWS_1254),
        "ansi_1255" => Some(encoding_rs::WINDOWS_1255),
        "ansi_1256" => Some(encoding_rs::WINDOWS_1256),
        "ansi_1257" => Some(encoding_rs::WINDOWS_1257),
        "ansi_1258" => Some(encoding_rs::WINDOWS_1258),

        // ISO encodings
        "iso8859-1" | "iso_8859-1" => Some(encoding_rs::WINDOWS_1252),
        "iso8859-2" | "iso_8859-2" => Some(encoding_rs::ISO_8859_2),
        "iso8859-3" | "iso_8859-3" => Some(encoding_rs::ISO_8859_3),
        "iso8859-4" | "iso_8859-4" => Some(encoding_rs::ISO_8859_4),
        "iso8859-5" | "iso_8859-5" => Some(encoding_rs::ISO_8859_5),
        "iso8859-6" | "iso_8859-6" => Some(encoding_rs::ISO_8859_6),
        "iso8859-7" | "iso_8859-7" => Some(encoding_rs::ISO_8859_7),
        "iso8859-8" | "iso_8859-8" => Some(encoding_rs::ISO_8859_8),
        "iso8859-9" | "iso_8859-9" => Some(encoding_rs::WINDOWS_1254),

        // KOI8 (Cyrillic)
        "koi8-r" => Some(encoding_rs::KOI8_R),
        "koi8-u" => Some(encoding_rs::KOI8_U),

        // UTF-8 / ASCII need no transcoding; unknown labels fall back
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_code_page(label: &str) -> Vec<u8> {
        format!(
            "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n9\n$DWGCODEPAGE\n3\n{label}\n0\nENDSEC\n"
        )
        .into_bytes()
    }

    #[test]
    fn test_detects_declared_code_page() {
        let head = header_with_code_page("ANSI_1251");
        assert_eq!(detect_code_page(&head), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_utf8_label_needs_no_transcoding() {
        let head = header_with_code_page("UTF-8");
        assert_eq!(detect_code_page(&head), None);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let head = header_with_code_page("SOMETHING_UNKNOWN");
        assert_eq!(detect_code_page(&head), None);
    }

    #[test]
    fn test_no_declaration() {
        let head = b"0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1032\n0\nENDSEC\n".to_vec();
        assert_eq!(detect_code_page(&head), None);
    }

    #[test]
    fn test_declaration_after_header_is_ignored() {
        let head =
            b"0\nSECTION\n2\nHEADER\n0\nENDSEC\n9\n$DWGCODEPAGE\n3\nANSI_1251\n".to_vec();
        assert_eq!(detect_code_page(&head), None);
    }

    #[test]
    fn test_mapping_case_insensitive() {
        assert_eq!(
            encoding_from_code_page("ansi_1252"),
            encoding_from_code_page("ANSI_1252")
        );
        assert_eq!(
            encoding_from_code_page("GB2312"),
            Some(encoding_rs::GBK)
        );
    }
}
