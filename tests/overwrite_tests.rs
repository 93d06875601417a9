mod common;
use common::temp_out;
use std::fs;
use std::path::Path;
use worklog::errors::AppError;
use worklog::export::confirm_overwrite;

#[test]
fn new_file_needs_no_answer() {
    let out = temp_out("overwrite_new_file", "json");
    let mut input: &[u8] = b"";
    let mut prompt: Vec<u8> = Vec::new();

    confirm_overwrite(Path::new(&out), false, &mut input, &mut prompt).expect("writable");
    assert!(prompt.is_empty());
}

#[test]
fn existing_file_requires_yes() {
    let out = temp_out("overwrite_existing_yes", "json");
    fs::write(&out, "old").expect("seed file");

    let mut input: &[u8] = b"Yes\n";
    let mut prompt: Vec<u8> = Vec::new();
    confirm_overwrite(Path::new(&out), false, &mut input, &mut prompt).expect("confirmed");
    assert!(String::from_utf8_lossy(&prompt).contains("Overwrite? [y/N]"));

    let mut input: &[u8] = b"\n";
    let err = confirm_overwrite(Path::new(&out), false, &mut input, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
}

#[test]
fn force_skips_the_question() {
    let out = temp_out("overwrite_force", "json");
    fs::write(&out, "old").expect("seed file");

    let mut input: &[u8] = b"n\n";
    let mut prompt: Vec<u8> = Vec::new();
    confirm_overwrite(Path::new(&out), true, &mut input, &mut prompt).expect("forced");
    assert!(prompt.is_empty());
}
