use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fs_err as fs;

use crate::errors::PlannerError;
use crate::state::Attachment;

pub const PDF_MIME: &str = "application/pdf";

/// Informational threshold only; larger files still attach.
pub const SIZE_NOTICE_BYTES: u64 = 10 * 1024 * 1024;

/// Validate and load a reference document. The only gate is an exact match
/// on the declared media type (guessed from the file name); no content
/// sniffing, no enforced size limit. On success the full bytes are read and
/// wrapped into a self-describing data URL.
pub fn attach(path: &Path) -> Result<Attachment, PlannerError> {
    let declared = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream");
    if declared != PDF_MIME {
        return Err(PlannerError::UnsupportedType(declared.to_string()));
    }

    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Attachment {
        encoded_data: format!("data:{PDF_MIME};base64,{}", BASE64.encode(&bytes)),
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormState;

    #[test]
    fn attach_accepts_pdf_and_encodes_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curriculum.pdf");
        fs::write(&path, b"%PDF-1.7 fake body").unwrap();

        let record = attach(&path).unwrap();
        assert_eq!(record.file_name, "curriculum.pdf");
        assert!(record.encoded_data.starts_with("data:application/pdf;base64,"));

        let payload = record.encoded_data.split_once("base64,").unwrap().1;
        assert_eq!(BASE64.decode(payload).unwrap(), b"%PDF-1.7 fake body");
    }

    #[test]
    fn attach_rejects_non_pdf_by_declared_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not a pdf").unwrap();

        let err = attach(&path).unwrap_err();
        assert!(matches!(err, PlannerError::UnsupportedType(ref mime) if mime == "text/plain"));
    }

    #[test]
    fn rejected_attach_leaves_existing_attachment_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("plan.pdf");
        fs::write(&pdf, b"%PDF").unwrap();
        let txt = dir.path().join("notes.txt");
        fs::write(&txt, b"nope").unwrap();

        let mut state = FormState::default();
        state.set_attachment(attach(&pdf).unwrap());

        assert!(attach(&txt).is_err());
        assert_eq!(state.attachment.as_ref().unwrap().file_name, "plan.pdf");
    }
}
