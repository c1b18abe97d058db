use crate::error::WebbyError;

pub fn exit_code_for_error(err: &WebbyError) -> i32 {
    match err {
        WebbyError::InvalidUrl(_) | WebbyError::InvalidRequest(_) => 3,
        WebbyError::Config(_) => 2,
        WebbyError::UnexpectedStatus(_) => 22,
        WebbyError::Io(_) => 23,
        WebbyError::Json(_) | WebbyError::Csv(_) => 26,
        WebbyError::RowRejected(_) => 42,
        WebbyError::Http(err) => http_exit_code(err),
    }
}

fn http_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    if err.is_builder() {
        return 3;
    }
    43
}

#[cfg(test)]
mod tests {
    use super::exit_code_for_error;
    use crate::error::WebbyError;
    use reqwest::StatusCode;

    #[test]
    fn exit_code_maps_invalid_url() {
        let err = WebbyError::InvalidUrl("bad".to_string());
        assert_eq!(exit_code_for_error(&err), 3);
    }

    #[test]
    fn exit_code_maps_unexpected_status() {
        let err = WebbyError::UnexpectedStatus(StatusCode::NOT_FOUND);
        assert_eq!(exit_code_for_error(&err), 22);
    }

    #[test]
    fn exit_code_maps_decode_errors() {
        let json = serde_json::from_str::<serde_json::Value>("{").expect_err("bad json");
        assert_eq!(exit_code_for_error(&WebbyError::Json(json)), 26);
    }
}
