//! 클라이언트 설정 (JSON 로드/저장)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BareunError, Result};

/// 운영 서버 주소
pub const DEFAULT_HOST: &str = "api.bareun.ai";
/// 운영 서버 포트 (TLS)
pub const DEFAULT_TLS_PORT: u16 = 443;
/// 로컬/사설 서버 기본 포트
pub const DEFAULT_PORT: u16 = 5656;

/// 바른 클라이언트 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// API 키 (필수)
    #[serde(default)]
    pub apikey: String,
    /// 서버 주소, 비어 있으면 운영 서버
    #[serde(default)]
    pub host: String,
    /// 서버 포트, 없으면 주소에 따라 443 또는 5656
    #[serde(default)]
    pub port: Option<u16>,
    /// 모든 분석 요청에 적용할 사용자 사전 이름
    #[serde(default)]
    pub custom_dicts: Vec<String>,
    /// 문장 자동 분리
    #[serde(default)]
    pub auto_split: bool,
    /// 띄어쓰기 보정
    #[serde(default = "default_auto_spacing")]
    pub auto_spacing: bool,
    /// 붙여쓰기 보정
    #[serde(default)]
    pub auto_jointing: bool,
}

fn default_auto_spacing() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            apikey: String::new(),
            host: String::new(),
            port: None,
            custom_dicts: Vec::new(),
            auto_split: false,
            auto_spacing: default_auto_spacing(),
            auto_jointing: false,
        }
    }
}

impl ClientConfig {
    /// API 키로 설정 생성
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            ..Self::default()
        }
    }

    /// 환경 변수(`BAREUN_API_KEY`, `BAREUN_HOST`, `BAREUN_PORT`)에서 설정 생성
    pub fn from_env() -> Result<Self> {
        let apikey = std::env::var("BAREUN_API_KEY").unwrap_or_default();
        let mut config = Self::new(apikey);
        if let Ok(host) = std::env::var("BAREUN_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("BAREUN_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| BareunError::Config(format!("BAREUN_PORT 값이 잘못되었습니다: {}", e)))?;
            config.port = Some(port);
        }
        Ok(config)
    }

    /// 서버 주소 설정
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// 서버 포트 설정
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// 사용자 사전 이름 설정
    pub fn with_custom_dicts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_dicts = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_auto_split(mut self, auto_split: bool) -> Self {
        self.auto_split = auto_split;
        self
    }

    pub fn with_auto_spacing(mut self, auto_spacing: bool) -> Self {
        self.auto_spacing = auto_spacing;
        self
    }

    pub fn with_auto_jointing(mut self, auto_jointing: bool) -> Self {
        self.auto_jointing = auto_jointing;
        self
    }

    /// 실제로 접속할 서버 주소 (공백 제거, 비어 있으면 운영 서버)
    pub fn resolved_host(&self) -> String {
        let host = self.host.trim();
        if host.is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            host.to_string()
        }
    }

    /// 실제로 접속할 포트
    pub fn resolved_port(&self) -> u16 {
        match self.port {
            Some(port) => port,
            None if is_production_host(&self.resolved_host()) => DEFAULT_TLS_PORT,
            None => DEFAULT_PORT,
        }
    }

    /// 공백을 제거한 API 키
    pub fn apikey(&self) -> &str {
        self.apikey.trim()
    }

    /// 네트워크를 쓰기 전에 설정을 검사합니다.
    pub fn validate(&self) -> Result<()> {
        if self.apikey().is_empty() {
            return Err(BareunError::Config(
                "API 키가 필요합니다. 발급받은 API 키를 입력해 주세요.".to_string(),
            ));
        }
        if self.resolved_port() == 0 {
            return Err(BareunError::Config("포트는 0일 수 없습니다".to_string()));
        }
        Ok(())
    }

    /// JSON 파일에서 설정 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// JSON 파일로 설정 저장
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// 운영 서버인지 확인 (대소문자 무시, 접두어 비교)
pub fn is_production_host(host: &str) -> bool {
    host.to_lowercase().starts_with(DEFAULT_HOST)
}
