use serde::Serialize;

/// Success envelope for admin-style endpoints. Failures go through
/// `AppError::into_response`, which emits `{ "success": false, "error": … }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
