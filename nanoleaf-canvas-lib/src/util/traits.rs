use serde::Serialize;

/// The meaning of an HTTP status returned by the device.
///
/// The device reports failures through the HTTP status only, and the body of an
/// error response is usually empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResponseCode {
    pub code: u16,
    pub message: &'static str,
}

impl ResponseCode {
    /// Maps a raw status to the code the device documents for it.
    pub fn from_status(status: u16) -> ResponseCode {
        match status {
            200 => OK,
            204 => NO_CONTENT,
            400 => BAD_REQUEST,
            401 => UNAUTHORIZED,
            403 => FORBIDDEN,
            404 => NOT_FOUND,
            422 => UNPROCESSABLE_ENTITY,
            500 => INTERNAL_SERVER_ERROR,
            code => ResponseCode {
                code,
                message: "Unknown status",
            },
        }
    }

    /// Any 2xx status.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }
}

// Codes from https://forum.nanoleaf.me/docs/openapi, section 4.

pub const OK: ResponseCode = ResponseCode {
    code: 200,
    message: "OK",
};
pub const NO_CONTENT: ResponseCode = ResponseCode {
    code: 204,
    message: "No Content",
};
pub const BAD_REQUEST: ResponseCode = ResponseCode {
    code: 400,
    message: "Bad Request",
};
/// The token in the URL is missing or no longer valid.
pub const UNAUTHORIZED: ResponseCode = ResponseCode {
    code: 401,
    message: "Unauthorized",
};
/// Returned when pairing while the device is not in pairing mode.
pub const FORBIDDEN: ResponseCode = ResponseCode {
    code: 403,
    message: "Forbidden",
};
pub const NOT_FOUND: ResponseCode = ResponseCode {
    code: 404,
    message: "Resource not found",
};
/// The request was well formed but the device rejected its values, e.g. a bad `animData`.
pub const UNPROCESSABLE_ENTITY: ResponseCode = ResponseCode {
    code: 422,
    message: "Unprocessable Entity",
};
pub const INTERNAL_SERVER_ERROR: ResponseCode = ResponseCode {
    code: 500,
    message: "Internal Server Error",
};

/// Trait for responses carrying a device status.
pub trait ResponseCodeTrait {
    /// Get the response code.
    /// # Returns
    /// The response code.
    fn response_code(&self) -> ResponseCode;

    fn map_response_code(code: u16) -> ResponseCode {
        ResponseCode::from_status(code)
    }
}
