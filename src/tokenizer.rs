//! 토큰화기
//!
//! 형태소 분석보다 가벼운 분절 결과(`Tokenize`)를 [`Tokenized`]로 돌려줍니다.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{classify, CallContext, Result};
use crate::request;
use crate::transport::{GrpcTransport, LanguageService, ServiceEndpoint};
use crate::view::{PosList, Tokenized};

pub struct Tokenizer<T = GrpcTransport> {
    transport: Arc<T>,
    config: ClientConfig,
    ctx: CallContext,
}

impl<T> std::fmt::Debug for Tokenizer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("ctx", &self.ctx)
            .field("auto_split", &self.config.auto_split)
            .finish()
    }
}

impl Tokenizer<GrpcTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = GrpcTransport::connect(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: LanguageService> Tokenizer<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    pub fn with_shared_transport(config: ClientConfig, transport: Arc<T>) -> Result<Self> {
        config.validate()?;
        let ctx = ServiceEndpoint::from_config(&config).call_context(config.apikey());
        log::debug!("Tokenizer 생성: {:?}", ctx);
        Ok(Self {
            transport,
            config,
            ctx,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokenize(&self, phrase: &str) -> Result<Tokenized> {
        self.tokenize_with(phrase, self.config.auto_split)
    }

    /// 문장 자동 분리 여부를 지정해서 토큰화
    pub fn tokenize_with(&self, phrase: &str, auto_split: bool) -> Result<Tokenized> {
        if phrase.is_empty() {
            log::warn!("빈 문장이 입력되었습니다. 토큰화하지 않습니다.");
            return Ok(Tokenized::empty());
        }
        log::debug!("토큰화 요청: {}자", phrase.chars().count());
        let res = self
            .transport
            .tokenize(request::tokenize(phrase, auto_split))
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(Tokenized::new(phrase, Some(res)))
    }

    /// 여러 문장을 줄바꿈으로 이어 한 번에 토큰화. 문장 자동 분리는 하지 않습니다.
    pub fn tokenize_list<S: AsRef<str>>(&self, phrases: &[S]) -> Result<Tokenized> {
        if phrases.is_empty() {
            log::warn!("빈 문장 목록이 입력되었습니다. 토큰화하지 않습니다.");
            return Ok(Tokenized::empty());
        }
        let joined = phrases
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("\n");
        self.tokenize_with(&joined, false)
    }

    /// 분절 결과 (`Tokenized::seg` 참고)
    pub fn seg(&self, phrase: &str, flatten: bool, join: bool, detail: bool) -> Result<PosList> {
        Ok(self.tokenize(phrase)?.seg(flatten, join, detail))
    }

    pub fn segments(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(phrase)?.segments())
    }

    pub fn nouns(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(phrase)?.nouns())
    }

    pub fn verbs(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(phrase)?.verbs())
    }
}
