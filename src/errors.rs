use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("PDF 파일만 업로드 가능합니다. (받은 형식: {0})")] UnsupportedType(String),
    #[error("API Key가 설정되지 않았습니다.")] MissingCredential,
    #[error("{0}")] Generation(String),
    #[error("clipboard error: {0}")] Clipboard(String),
    #[error("attachment read failed: {0}")] Io(#[from] std::io::Error),
}
