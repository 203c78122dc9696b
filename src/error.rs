use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::storage::StoreError;

/// 房间子系统统一错误分类 / Unified error taxonomy for the rooms subsystem
///
/// 业务失败（未授权、未找到、参数错误）作为显式状态返回，
/// 不作为异常处理；持久化和其它意外故障统一收敛为 Internal。
/// Business failures (unauthorized, not found, bad request) are explicit
/// statuses, not exceptions; persistence and other unexpected faults all
/// normalize to Internal.
#[derive(Error, Debug)]
pub enum RoomsError {
    #[error("未授权 / unauthorized")]
    Unauthorized,

    #[error("未找到 / not found")]
    NotFound,

    #[error("请求无效 / bad request: {message}")]
    BadRequest { message: String },

    #[error("内部错误 / internal error")]
    Internal(#[source] anyhow::Error),
}

impl RoomsError {
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal<E: Into<anyhow::Error>>(err: E) -> Self {
        Self::Internal(err.into())
    }

    /// 错误键，与下游调用方约定的稳定标识
    /// Error key, the stable identifier agreed with downstream callers
    pub fn key(&self) -> &'static str {
        match self {
            RoomsError::Unauthorized => "UNAUTHORIZED",
            RoomsError::NotFound => "NOT_FOUND",
            RoomsError::BadRequest { .. } => "BAD_REQUEST",
            RoomsError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for RoomsError {
    fn from(err: StoreError) -> Self {
        RoomsError::Internal(anyhow::Error::new(err))
    }
}

impl ResponseError for RoomsError {
    fn status_code(&self) -> StatusCode {
        match self {
            RoomsError::Unauthorized => StatusCode::UNAUTHORIZED,
            RoomsError::NotFound => StatusCode::NOT_FOUND,
            RoomsError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RoomsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 意外故障在边界处记录原始错误链，调用方只拿到归一化响应
        // Unexpected faults log the original chain at the boundary, the caller
        // only sees the normalized response
        let body = match self {
            RoomsError::Internal(source) => {
                error!("内部错误 / internal error: {:#}", source);
                json!({ "key": self.key(), "message": "internal error" })
            }
            RoomsError::BadRequest { message } => {
                json!({ "key": self.key(), "message": message })
            }
            _ => json!({ "key": self.key() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(RoomsError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(RoomsError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RoomsError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RoomsError::internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_faults_normalize_to_internal() {
        let err: RoomsError = StoreError::backend("connection reset").into();
        assert_eq!(err.key(), "INTERNAL_ERROR");
    }
}
