//! 접속 주소와 채널 선택
//!
//! 운영 서버(`api.bareun.ai`)에는 내장된 루트 인증서(webpki)로 TLS 채널을,
//! 그 밖의 서버에는 평문 채널을 엽니다. 채널은 지연 연결이라 첫 호출 전까지
//! 네트워크를 쓰지 않습니다.

use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::config::{is_production_host, ClientConfig};
use crate::error::{CallContext, Result};

/// 요청/응답 최대 크기 (100MB)
pub const MAX_MESSAGE_LENGTH: usize = 100 * 1024 * 1024;

/// 모든 호출에 붙는 클라이언트 식별자
pub const CLIENT_ID: &str = concat!("bareun-rs/", env!("CARGO_PKG_VERSION"));

/// 접속할 서버
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
    /// TLS 사용 여부
    pub secure: bool,
}

impl ServiceEndpoint {
    pub fn from_config(config: &ClientConfig) -> Self {
        let host = config.resolved_host();
        let port = config.resolved_port();
        let secure = is_production_host(&host);
        Self { host, port, secure }
    }

    pub fn uri(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    /// 오류 메시지용 호출 정보
    pub fn call_context(&self, apikey: &str) -> CallContext {
        CallContext {
            apikey: apikey.to_string(),
            host: self.host.clone(),
            port: self.port,
        }
    }

    /// 지연 연결 채널 생성
    ///
    /// tokio 런타임 컨텍스트 안에서 호출해야 합니다.
    pub fn channel(&self) -> Result<Channel> {
        let mut endpoint = Endpoint::from_shared(self.uri())?.user_agent(CLIENT_ID)?;
        if self.secure {
            let tls = ClientTlsConfig::new()
                .domain_name(self.host.clone())
                .with_webpki_roots();
            endpoint = endpoint.tls_config(tls)?;
        }
        Ok(endpoint.connect_lazy())
    }
}
