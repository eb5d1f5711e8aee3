//! 형태소 분석기
//!
//! 바른 서버의 형태소 분석(`AnalyzeSyntax`)을 호출하고 결과를 [`Tagged`]로
//! 돌려줍니다. 사용자 사전의 생성, 조회, 삭제도 여기서 합니다.
//!
//! # 사용 예시
//!
//! ```no_run
//! use bareun::{ClientConfig, Tagger};
//!
//! let tagger = Tagger::new(ClientConfig::new("koba-XXXXXXX-XXXXXXX-XXXXXXX"))?;
//! let tagged = tagger.tag("햇빛이 선명하게 빛난다.")?;
//! println!("{:?}", tagged.nouns());
//! # Ok::<(), bareun::BareunError>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dict::{deleted_names, CustomDict};
use crate::error::{classify, CallContext, Result};
use crate::proto::{CustomDictionaryMeta, RemoveCustomDictionariesRequest};
use crate::request::{self, TagOptions};
use crate::transport::{CustomDictionaryService, GrpcTransport, LanguageService, ServiceEndpoint};
use crate::view::{PosList, Tagged};

/// 형태소 분석기
pub struct Tagger<T = GrpcTransport> {
    transport: Arc<T>,
    config: ClientConfig,
    ctx: CallContext,
    dicts: HashMap<String, CustomDict<T>>,
}

impl<T> std::fmt::Debug for Tagger<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagger")
            .field("ctx", &self.ctx)
            .field("custom_dicts", &self.config.custom_dicts)
            .field("loaded_dicts", &self.dicts.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Tagger<GrpcTransport> {
    /// 설정으로 분석기 생성
    ///
    /// API 키가 비어 있으면 서버에 접속하지 않고 실패합니다.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = GrpcTransport::connect(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T> Tagger<T>
where
    T: LanguageService + CustomDictionaryService,
{
    /// 전송 계층을 직접 지정해서 생성
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// 다른 분석기와 전송 계층을 공유해서 생성
    pub fn with_shared_transport(config: ClientConfig, transport: Arc<T>) -> Result<Self> {
        config.validate()?;
        let ctx = ServiceEndpoint::from_config(&config).call_context(config.apikey());
        log::debug!("Tagger 생성: {:?}", ctx);
        Ok(Self {
            transport,
            config,
            ctx,
            dicts: HashMap::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 이 분석기의 기본 분석 옵션
    pub fn options(&self) -> TagOptions {
        TagOptions::from_config(&self.config)
    }

    /// 기본 옵션으로 분석
    pub fn tag(&self, phrase: &str) -> Result<Tagged> {
        self.tag_with(phrase, &self.options())
    }

    /// 옵션을 지정해서 분석
    ///
    /// 빈 문자열이면 서버를 부르지 않고 빈 결과를 돌려줍니다.
    pub fn tag_with(&self, phrase: &str, opts: &TagOptions) -> Result<Tagged> {
        if phrase.is_empty() {
            log::warn!("빈 문장이 입력되었습니다. 분석하지 않습니다.");
            return Ok(Tagged::empty());
        }
        log::debug!("형태소 분석 요청: {}자", phrase.chars().count());
        let res = self
            .transport
            .analyze_syntax(request::analyze_syntax(phrase, opts))
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(Tagged::new(phrase, Some(res)))
    }

    /// 여러 문장을 줄바꿈으로 이어 한 번에 분석
    pub fn tags<S: AsRef<str>>(&self, phrases: &[S]) -> Result<Tagged> {
        if phrases.is_empty() {
            log::warn!("빈 문장 목록이 입력되었습니다. 분석하지 않습니다.");
            return Ok(Tagged::empty());
        }
        let joined = join_lines(phrases);
        self.tag(&joined)
    }

    /// 문장 목록을 나눈 그대로 분석
    ///
    /// 호출자가 나눈 문장 경계를 유지하므로 문장 자동 분리는 하지 않습니다.
    pub fn taglist<S: AsRef<str>>(&self, phrases: &[S]) -> Result<Tagged> {
        if phrases.is_empty() {
            log::warn!("빈 문장 목록이 입력되었습니다. 분석하지 않습니다.");
            return Ok(Tagged::empty());
        }
        let sentences: Vec<String> = phrases.iter().map(|p| p.as_ref().to_string()).collect();
        let req = request::analyze_syntax_list(&sentences, &self.options());
        log::debug!("문장 목록 분석 요청: {}문장", sentences.len());
        let res = self
            .transport
            .analyze_syntax_list(req)
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(Tagged::new(sentences.join("\n"), Some(res.into())))
    }

    /// 품사 태깅 (`Tagged::pos` 참고)
    pub fn pos(&self, phrase: &str, flatten: bool, join: bool, detail: bool) -> Result<PosList> {
        Ok(self.tag(phrase)?.pos(flatten, join, detail))
    }

    pub fn morphs(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tag(phrase)?.morphs())
    }

    pub fn nouns(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tag(phrase)?.nouns())
    }

    pub fn verbs(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self.tag(phrase)?.verbs())
    }

    /// 이후 모든 분석에 적용할 사용자 사전 이름
    pub fn set_custom_dicts<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.custom_dicts = names
            .into_iter()
            .map(Into::into)
            .filter(|n: &String| !n.is_empty())
            .collect();
    }

    pub fn custom_dicts(&self) -> &[String] {
        &self.config.custom_dicts
    }

    /// 이름에 해당하는 사용자 사전
    ///
    /// 처음 요청할 때 빈 사전을 만들고 이후에는 같은 사전을 돌려줍니다.
    /// 서버에서 사전을 지워도 여기 저장된 로컬 사전은 남습니다.
    pub fn custom_dict(&mut self, name: &str) -> Result<&mut CustomDict<T>> {
        match self.dicts.entry(name.to_string()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let dict = CustomDict::new(name, Arc::clone(&self.transport), self.ctx.clone())?;
                Ok(e.insert(dict))
            }
        }
    }

    /// 서버에 등록된 사용자 사전 목록
    pub fn custom_dict_list(&self) -> Result<Vec<CustomDictionaryMeta>> {
        let res = self
            .transport
            .get_custom_dictionary_list()
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(res.domain_dicts)
    }

    /// 지정한 사용자 사전들을 서버에서 지웁니다.
    ///
    /// 실제로 지워진 이름들을 돌려줍니다.
    pub fn remove_custom_dicts<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>> {
        let req = RemoveCustomDictionariesRequest {
            domain_names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            all: false,
        };
        self.remove(req)
    }

    /// 서버의 사용자 사전을 모두 지웁니다.
    pub fn remove_all_custom_dicts(&self) -> Result<Vec<String>> {
        let req = RemoveCustomDictionariesRequest {
            domain_names: Vec::new(),
            all: true,
        };
        self.remove(req)
    }

    fn remove(&self, req: RemoveCustomDictionariesRequest) -> Result<Vec<String>> {
        let res = self
            .transport
            .remove_custom_dictionaries(req)
            .map_err(|s| classify(s, &self.ctx))?;
        let removed = deleted_names(res.deleted_domain_names);
        log::info!("사용자 사전 삭제: {:?}", removed);
        Ok(removed)
    }
}

fn join_lines<S: AsRef<str>>(phrases: &[S]) -> String {
    phrases
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n")
}
