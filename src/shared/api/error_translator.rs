use std::collections::HashMap;

use actix_web::http::StatusCode;
use once_cell::sync::Lazy;

/// Client-facing category of a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Payload is missing a property or carries the wrong type.
    Validation,
    /// Referenced thread, comment or reply is absent or soft-deleted.
    NotFound,
    /// The caller does not own the content it tries to change.
    Authorization,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

const fn entry(kind: ErrorKind, message: &'static str) -> TranslatedError {
    TranslatedError { kind, message }
}

static DIRECTORY: Lazy<HashMap<&'static str, TranslatedError>> = Lazy::new(|| {
    use ErrorKind::*;

    HashMap::from([
        // Threads
        (
            "THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            entry(
                Validation,
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
            entry(Validation, "title dan body harus berupa string"),
        ),
        ("THREAD.NOT_FOUND", entry(NotFound, "thread tidak ditemukan")),
        // Comments
        (
            "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            entry(
                Validation,
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            entry(Validation, "content harus berupa string"),
        ),
        ("COMMENT.NOT_FOUND", entry(NotFound, "komentar tidak ditemukan")),
        (
            "DELETE_COMMENT_USE_CASE.USER_IS_NOT_COMMENT_OWNER",
            entry(Authorization, "anda tidak berhak menghapus komentar ini"),
        ),
        // Replies
        (
            "CREATE_REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
            entry(
                Validation,
                "tidak dapat membuat reply baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            "CREATE_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION",
            entry(Validation, "content harus berupa string"),
        ),
        ("REPLY.NOT_FOUND", entry(NotFound, "balasan tidak ditemukan")),
        (
            "DELETE_REPLY_USE_CASE.USER_IS_NOT_REPLY_OWNER",
            entry(Authorization, "anda tidak berhak menghapus balasan ini"),
        ),
    ])
});

/// Looks up the kind and localized message for a domain error code.
///
/// Returns `None` for codes that are not client errors (infrastructure
/// failures, broken invariants); callers answer those with a 500.
pub fn translate(code: &str) -> Option<&'static TranslatedError> {
    DIRECTORY.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_codes_map_to_bad_request() {
        for code in [
            "THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            "THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
            "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            "CREATE_REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
            "CREATE_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION",
        ] {
            let translated = translate(code).unwrap_or_else(|| panic!("{code} missing"));
            assert_eq!(translated.kind, ErrorKind::Validation);
            assert_eq!(translated.kind.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn ownership_codes_map_to_forbidden() {
        let comment = translate("DELETE_COMMENT_USE_CASE.USER_IS_NOT_COMMENT_OWNER").unwrap();
        let reply = translate("DELETE_REPLY_USE_CASE.USER_IS_NOT_REPLY_OWNER").unwrap();

        assert_eq!(comment.kind, ErrorKind::Authorization);
        assert_eq!(comment.message, "anda tidak berhak menghapus komentar ini");
        assert_eq!(reply.kind.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_codes_carry_localized_messages() {
        assert_eq!(
            translate("THREAD.NOT_FOUND").unwrap().message,
            "thread tidak ditemukan"
        );
        assert_eq!(
            translate("COMMENT.NOT_FOUND").unwrap().message,
            "komentar tidak ditemukan"
        );
        assert_eq!(
            translate("REPLY.NOT_FOUND").unwrap().kind,
            ErrorKind::NotFound
        );
    }

    #[test]
    fn unknown_codes_are_not_translated() {
        assert!(translate("THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY").is_none());
        assert!(translate("").is_none());
    }
}
