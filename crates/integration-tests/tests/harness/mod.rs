#![allow(dead_code)]

pub mod config;
pub mod mock_openai;
pub mod server;

/// Multipart form carrying `payload` as the `audio` file field
pub fn audio_form(payload: &[u8]) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(payload.to_vec())
        .file_name("question.webm")
        .mime_str("audio/webm")
        .expect("valid mime");

    reqwest::multipart::Form::new().part(earshot_server::AUDIO_FIELD, part)
}

/// Number of entries left in a staging directory (0 if it was never created)
pub fn staged_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map_or(0, Iterator::count)
}
