use form_encoding::{normalize, Charset, FormDataSet, FormFile, FormOptions};

fn utf8() -> FormOptions {
    FormOptions::new().with_charset(Charset::for_label("utf-8").unwrap())
}

fn windows_1252() -> FormOptions {
    FormOptions::new().with_charset(Charset::for_label("windows-1252").unwrap())
}

#[test]
fn test_normalize_example() {
    assert_eq!(normalize("a\rb\nc\r\nd"), "a\r\nb\r\nc\r\nd");
}

#[test]
fn test_plaintext_format() {
    let mut set = FormDataSet::new();
    set.append_text("a", "1", "text").unwrap();
    set.append_text("b", "2", "text").unwrap();

    assert_eq!(set.as_plaintext(&utf8()), "a=1\r\nb=2\r\n");
}

#[test]
fn test_plaintext_empty_set() {
    let set = FormDataSet::new();
    assert_eq!(set.as_plaintext(&utf8()), "");
    assert_eq!(set.as_url_encoded(&utf8()), "");
}

#[test]
fn test_multipart_single_text_entry() {
    let mut set = FormDataSet::new();
    set.append_text("field", "value", "text").unwrap();

    let b = set.boundary();
    let expected = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"field\"\r\n\r\nvalue\r\n--{b}--\r\n"
    );
    assert_eq!(set.as_multipart(&utf8()), expected.into_bytes());
}

#[test]
fn test_multipart_charset_field_reports_canonical_name() {
    let mut set = FormDataSet::new();
    set.append_text("_charset_", "whatever was stored", "Hidden")
        .unwrap();

    let body = String::from_utf8(set.as_multipart(&utf8())).unwrap();
    println!("Multipart with _charset_:\n{}", body);

    assert!(body.contains("\r\n\r\nUTF-8\r\n"));
    assert!(!body.contains("whatever was stored"));
}

#[test]
fn test_multipart_textarea_and_text_both_send_crlf() {
    let mut set = FormDataSet::new();
    set.append_text("notes", "one\ntwo", "textarea").unwrap();
    set.append_text("line", "three\rfour", "text").unwrap();

    let body = String::from_utf8(set.as_multipart(&utf8())).unwrap();
    assert!(body.contains("\r\n\r\none\r\ntwo\r\n"));
    assert!(body.contains("\r\n\r\nthree\r\nfour\r\n"));
}

#[test]
fn test_multipart_header_escaping() {
    let mut set = FormDataSet::new();
    set.append_text("say \"hi\"\nnow", "v", "text").unwrap();

    let body = String::from_utf8(set.as_multipart(&utf8())).unwrap();
    assert!(body.contains("Content-Disposition: form-data; name=\"say %22hi%22%0Anow\"\r\n"));
}

#[test]
fn test_multipart_legacy_charset() {
    let mut set = FormDataSet::new();
    set.append_text("caf\u{e9}", "\u{20ac}5 \u{2603}", "text").unwrap();

    let body = set.as_multipart(&windows_1252());
    let b = set.boundary();

    let mut expected = format!("--{b}\r\nContent-Disposition: form-data; name=\"caf").into_bytes();
    expected.push(0xe9);
    expected.extend_from_slice(b"\"\r\n\r\n");
    expected.push(0x80);
    expected.extend_from_slice(b"5 &#9731;\r\n");
    expected.extend_from_slice(format!("--{b}--\r\n").as_bytes());

    assert_eq!(body, expected);
}

#[test]
fn test_multipart_header_unmappable_chars_become_references() {
    let mut set = FormDataSet::new();
    set.append_file(
        "\u{2603}",
        FormFile::new("\u{1f600}.txt", b"x".to_vec()),
        "file",
    )
    .unwrap();

    let body = set.as_multipart(&windows_1252());
    let b = set.boundary();

    let expected = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"&#9731;\"; filename=\"&#128512;.txt\"\r\n\
         Content-Type: application/octet-stream\r\n\r\nx\r\n--{b}--\r\n"
    );
    assert_eq!(body, expected.into_bytes());
}

#[test]
fn test_multipart_binary_passes_through() {
    let mut set = FormDataSet::new();
    let payload: Vec<u8> = (0..=255).collect();
    set.append_binary("bytes", payload.clone(), "hidden").unwrap();

    let body = set.as_multipart(&windows_1252());
    assert!(body
        .windows(payload.len())
        .any(|window| window == payload.as_slice()));
}

#[test]
fn test_urlencoded_format() {
    let mut set = FormDataSet::new();
    set.append_text("name", "J\u{fc}rgen M\u{fc}ller", "text").unwrap();
    set.append_text("math", "1+1=2 & 50%", "text").unwrap();

    assert_eq!(
        set.as_url_encoded(&utf8()),
        "name=J%C3%BCrgen+M%C3%BCller&math=1%2B1%3D2+%26+50%25"
    );
    assert_eq!(
        set.as_url_encoded(&windows_1252()),
        "name=J%FCrgen+M%FCller&math=1%2B1%3D2+%26+50%25"
    );
}

#[test]
fn test_urlencoded_unmappable_falls_back_to_reference() {
    let mut set = FormDataSet::new();
    set.append_text("emoji", "\u{1f600}", "text").unwrap();

    assert_eq!(set.as_url_encoded(&windows_1252()), "emoji=%26%23128512%3B");
}

#[test]
fn test_urlencoded_textarea_sends_crlf() {
    let mut set = FormDataSet::new();
    set.append_text("t", "a\nb", "textarea").unwrap();

    assert_eq!(set.as_url_encoded(&utf8()), "t=a%0D%0Ab");
}
