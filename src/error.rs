//! 오류 정의와 gRPC 상태 코드 분류
//!
//! 원격 호출이 실패하면 사용자가 바로 고칠 수 있도록 API 키, 서버 주소,
//! 요청 내용 중 무엇이 문제인지 구분한 오류로 바꿉니다.

use std::fmt;

use thiserror::Error;
use tonic::{Code, Status};

/// 서버가 세부 메시지를 주지 않았을 때 쓰는 문구
pub const NO_SERVER_MESSAGE: &str = "서버에서 추가 메시지를 제공하지 않았습니다.";

pub type Result<T> = std::result::Result<T, BareunError>;

#[derive(Error, Debug)]
pub enum BareunError {
    /// 인증 실패 (PERMISSION_DENIED)
    #[error("\n입력한 API KEY가 정확한지 확인해 주세요.\n > APIKEY: {apikey}\n서버 메시지: {server_message}")]
    InvalidCredential {
        apikey: String,
        server_message: String,
        #[source]
        source: Status,
    },

    /// 서버 연결 불가 (UNAVAILABLE)
    #[error("\n서버에 연결할 수 없습니다. 입력한 서버주소 [{host}:{port}]가 정확한지 확인해 주세요.\n서버 메시지: {server_message}")]
    UnreachableEndpoint {
        host: String,
        port: u16,
        server_message: String,
        #[source]
        source: Status,
    },

    /// 잘못된 요청 (INVALID_ARGUMENT)
    #[error("\n잘못된 요청이 서버로 전송되었습니다. 입력 데이터를 확인하세요.\n서버 메시지: {server_message}")]
    MalformedRequest {
        server_message: String,
        #[source]
        source: Status,
    },

    /// 분류하지 않은 원격 호출 오류. 원래 상태를 그대로 전달합니다.
    #[error(transparent)]
    Rpc(#[from] Status),

    /// 설정 오류 (API 키 누락, 잘못된 주소 등)
    #[error("설정 오류: {0}")]
    Config(String),

    /// 채널 생성 실패
    #[error("채널 생성 실패: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 처리 오류: {0}")]
    Json(#[from] serde_json::Error),
}

impl BareunError {
    /// 원격 호출 실패에서 비롯된 오류라면 원래의 gRPC 상태를 돌려줍니다.
    pub fn status(&self) -> Option<&Status> {
        match self {
            BareunError::InvalidCredential { source, .. }
            | BareunError::UnreachableEndpoint { source, .. }
            | BareunError::MalformedRequest { source, .. } => Some(source),
            BareunError::Rpc(status) => Some(status),
            _ => None,
        }
    }
}

/// 오류 메시지에 넣을 호출 설정 정보
#[derive(Clone, PartialEq, Eq)]
pub struct CallContext {
    pub apikey: String,
    pub host: String,
    pub port: u16,
}

impl fmt::Debug for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // API 키는 로그에 남기지 않음
        f.debug_struct("CallContext")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

/// gRPC 상태를 사용자용 오류로 분류합니다.
///
/// | 상태 코드          | 분류                  |
/// |--------------------|-----------------------|
/// | PERMISSION_DENIED  | `InvalidCredential`   |
/// | UNAVAILABLE        | `UnreachableEndpoint` |
/// | INVALID_ARGUMENT   | `MalformedRequest`    |
/// | 그 외              | `Rpc` (원래 상태 그대로) |
pub fn classify(status: Status, ctx: &CallContext) -> BareunError {
    let server_message = if status.message().is_empty() {
        NO_SERVER_MESSAGE.to_string()
    } else {
        status.message().to_string()
    };

    match status.code() {
        Code::PermissionDenied => BareunError::InvalidCredential {
            apikey: ctx.apikey.clone(),
            server_message,
            source: status,
        },
        Code::Unavailable => BareunError::UnreachableEndpoint {
            host: ctx.host.clone(),
            port: ctx.port,
            server_message,
            source: status,
        },
        Code::InvalidArgument => BareunError::MalformedRequest {
            server_message,
            source: status,
        },
        _ => BareunError::Rpc(status),
    }
}
