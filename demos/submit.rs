//! Encode one form submission in all three formats.
//!
//! Run with: cargo run --example submit

use form_encoding::{BinaryPolicy, Charset, FormDataSet, FormFile, FormOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut set = FormDataSet::new();
    set.append_text("_charset_", "", "hidden")?;
    set.append_text("name", "Zo\u{eb} Smith", "text")?;
    set.append_text("message", "Hello!\nSee the attached \u{2603} file.", "textarea")?;
    set.append_file(
        "attachment",
        FormFile::new("hello.txt", b"hello, world\n".to_vec()).with_content_type("text/plain"),
        "file",
    )?;

    let options = FormOptions::default();

    // multipart/form-data
    let body = set.as_multipart(&options);
    println!("Content-Type: multipart/form-data; boundary={}\n", set.boundary());
    println!("{}", String::from_utf8_lossy(&body));

    // application/x-www-form-urlencoded, in a legacy charset
    let latin = FormOptions::new()
        .with_charset(Charset::for_label("windows-1252")?)
        .with_binary_policy(BinaryPolicy::Omit);
    println!("Content-Type: application/x-www-form-urlencoded\n");
    println!("{}\n", set.as_url_encoded(&latin));

    // text/plain
    println!("Content-Type: text/plain\n");
    print!("{}", set.as_plaintext(&options));

    Ok(())
}
